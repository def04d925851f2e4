use std::{net::IpAddr, sync::Arc};

use axum::Router;
use fusion_core_contact_contracts::ContactFeatureService;
use fusion_core_health_contracts::HealthFeatureService;
use fusion_core_pages_contracts::PagesFeatureService;
use fusion_templates_contracts::TemplateService;
use fusion_utils::Apply;
use tokio::net::TcpListener;

use crate::routes::index::IndexState;

mod middlewares;
mod routes;

#[derive(Debug, Clone)]
pub struct RestServer<Health, Pages, Contact, Templates> {
    health: Health,
    pages: Pages,
    contact: Contact,
    templates: Templates,
}

impl<Health, Pages, Contact, Templates> RestServer<Health, Pages, Contact, Templates>
where
    Health: HealthFeatureService,
    Pages: PagesFeatureService,
    Contact: ContactFeatureService,
    Templates: TemplateService,
{
    pub fn new(health: Health, pages: Pages, contact: Contact, templates: Templates) -> Self {
        Self {
            health,
            pages,
            contact,
            templates,
        }
    }

    pub async fn serve(self, host: IpAddr, port: u16) -> anyhow::Result<()> {
        let router = self.router();
        let listener = TcpListener::bind((host, port)).await?;
        axum::serve(listener, router).await.map_err(Into::into)
    }

    fn router(self) -> Router<()> {
        let index_state = Arc::new(IndexState {
            pages: self.pages,
            contact: self.contact,
            templates: self.templates,
        });

        Router::new()
            .merge(routes::index::router(index_state))
            .merge(routes::health::router(self.health.into()))
            .apply(middlewares::trace::add)
            .apply(middlewares::request_id::add)
            .apply(middlewares::panic_handler::add)
    }
}
