use fusion_models::{
    contact::{ContactForm, FieldErrors},
    content::{Service, TeamMemberProfile},
};
use serde::Serialize;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait TemplateService: Send + Sync + 'static {
    /// Render the given template.
    fn render<T: Template + 'static>(&self, template: &T) -> anyhow::Result<String>;
}

#[cfg(feature = "mock")]
impl MockTemplateService {
    pub fn with_render<T: Template + Send + PartialEq + std::fmt::Debug + 'static>(
        mut self,
        template: T,
        result: String,
    ) -> Self {
        self.expect_render()
            .once()
            .with(mockall::predicate::eq(template))
            .return_once(|_| Ok(result));
        self
    }
}

pub trait Template: Serialize {
    /// Registered template name. Must keep the `.html` suffix so tera
    /// autoescapes interpolated values.
    const NAME: &'static str;
    const TEMPLATE: &'static str;
}

pub const BASE_TEMPLATE_NAME: &str = "base.html";
pub const BASE_TEMPLATE: &str = include_str!("../templates/base.html");

macro_rules! templates {
    ($( $ident:ident ( $path:literal ), )* ) => {
        $(
            impl Template for $ident {
                const NAME: &'static str = $path;
                const TEMPLATE: &'static str = include_str!(concat!("../templates/", $path));
            }
        )*

        pub const TEMPLATES: &[(&str, &str)] = &[
            $( ($ident::NAME, $ident::TEMPLATE) ),*
        ];
    };
}

templates! {
    IndexTemplate("index.html"),
}

/// The landing page, including the contact form with any previously submitted
/// values and their validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct IndexTemplate {
    pub notice: Option<Notice>,
    pub form: ContactForm,
    pub errors: FieldErrors,
    pub services: Vec<Service>,
    pub team: Vec<TeamMemberProfile>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    Success,
    Error,
}
