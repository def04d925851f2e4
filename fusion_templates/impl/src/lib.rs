use std::sync::Arc;

use fusion_templates_contracts::{
    Template, TemplateService, BASE_TEMPLATE, BASE_TEMPLATE_NAME, TEMPLATES,
};
use tera::Tera;

#[derive(Debug, Clone, Default)]
pub struct TemplateServiceImpl {
    state: State,
}

impl TemplateServiceImpl {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone)]
struct State(Arc<Tera>);

impl Default for State {
    fn default() -> Self {
        let mut tera = Tera::default();

        tera.add_raw_template(BASE_TEMPLATE_NAME, BASE_TEMPLATE)
            .unwrap();

        for &(name, template) in TEMPLATES {
            tera.add_raw_template(name, template).unwrap();
        }

        Self(tera.into())
    }
}

impl TemplateService for TemplateServiceImpl {
    fn render<T: Template>(&self, template: &T) -> anyhow::Result<String> {
        let context = tera::Context::from_serialize(template)?;
        self.state.0.render(T::NAME, &context).map_err(Into::into)
    }
}
