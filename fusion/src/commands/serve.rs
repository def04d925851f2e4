use fusion_api_rest::RestServer;
use fusion_config::Config;
use fusion_core_contact_impl::{ContactFeatureConfig, ContactFeatureServiceImpl};
use fusion_core_health_impl::{HealthFeatureConfig, HealthFeatureServiceImpl};
use fusion_core_pages_impl::PagesFeatureServiceImpl;
use fusion_email_contracts::EmailService;
use fusion_persistence_contracts::Database;
use fusion_persistence_postgres::{
    services::PostgresServiceRepository, team_members::PostgresTeamMemberRepository,
};
use fusion_shared_impl::time::TimeServiceImpl;
use fusion_templates_impl::TemplateServiceImpl;
use tracing::info;

use crate::{database, email};

pub async fn serve(config: Config) -> anyhow::Result<()> {
    info!("Connecting to database");
    let database = database::connect(&config.database).await?;
    database.ping().await?;

    info!("Applying pending migrations");
    let mut applied = false;
    for name in database.run_migrations(None).await? {
        info!("Applied {name}");
        applied = true;
    }
    if !applied {
        info!("No migrations pending");
    }

    info!("Connecting to smtp server");
    let email = email::connect(&config.email)?;
    email.ping().await?;

    let health = HealthFeatureServiceImpl::new(
        TimeServiceImpl,
        database.clone(),
        email.clone(),
        HealthFeatureConfig {
            cache_ttl: config.health.cache_ttl.into(),
        },
    );
    let pages = PagesFeatureServiceImpl::new(
        database,
        PostgresServiceRepository,
        PostgresTeamMemberRepository,
    );
    let contact = ContactFeatureServiceImpl::new(
        email,
        ContactFeatureConfig {
            recipients: config.contact.recipients.clone().into(),
            reply_to: config.contact.reply_to.clone(),
        },
    );

    let server = RestServer::new(health, pages, contact, TemplateServiceImpl::new());
    info!(
        "Starting http server on {}:{}",
        config.http.host, config.http.port
    );
    server.serve(config.http.host, config.http.port).await
}
