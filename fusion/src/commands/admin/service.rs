use anyhow::{ensure, Context};
use clap::Subcommand;
use fusion_config::Config;
use fusion_models::content::{Service, ServiceIcon, ServiceId};
use fusion_persistence_contracts::{services::ServiceRepository, Database, Transaction};
use fusion_persistence_postgres::services::PostgresServiceRepository;
use fusion_shared_contracts::{id::IdService, time::TimeService};
use fusion_shared_impl::{id::IdServiceImpl, time::TimeServiceImpl};
use tracing::info;
use uuid::Uuid;

use crate::database;

#[derive(Debug, Subcommand)]
pub enum AdminServiceCommand {
    /// Create a new service
    #[command(aliases(["c", "new", "n", "+"]))]
    Create {
        /// The name of the service
        name: String,
        /// A short description shown on the landing page
        description: String,
        /// The LineIcons class of the icon, e.g. "lni-cog"
        icon: ServiceIcon,
    },
    /// List all services
    #[command(aliases(["ls", "l"]))]
    List,
    /// Reactivate a service
    Activate { id: Uuid },
    /// Deactivate a service without deleting it
    Deactivate { id: Uuid },
}

impl AdminServiceCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            AdminServiceCommand::Create {
                name,
                description,
                icon,
            } => create(config, name, description, icon).await,
            AdminServiceCommand::List => list(config).await,
            AdminServiceCommand::Activate { id } => set_active(config, id.into(), true).await,
            AdminServiceCommand::Deactivate { id } => set_active(config, id.into(), false).await,
        }
    }
}

async fn create(
    config: Config,
    name: String,
    description: String,
    icon: ServiceIcon,
) -> anyhow::Result<()> {
    let db = database::connect(&config.database).await?;
    let mut txn = db.begin_transaction().await?;

    let now = TimeServiceImpl.now();
    let service = Service {
        id: IdServiceImpl.generate(),
        name: name.try_into()?,
        description: description.try_into()?,
        icon,
        active: true,
        created: now,
        updated: now,
    };

    PostgresServiceRepository
        .create(&mut txn, &service)
        .await
        .context("Failed to create service")?;
    txn.commit().await?;

    info!("Service has been created:\n{service:#?}");

    Ok(())
}

async fn list(config: Config) -> anyhow::Result<()> {
    let db = database::connect(&config.database).await?;
    let mut txn = db.begin_transaction().await?;

    for service in PostgresServiceRepository.list(&mut txn).await? {
        let marker = if service.active { "active" } else { "inactive" };
        println!(
            "[{marker}] {} {} ({})",
            *service.id,
            service.name.as_str(),
            service.icon
        );
    }

    Ok(())
}

async fn set_active(config: Config, id: ServiceId, active: bool) -> anyhow::Result<()> {
    let db = database::connect(&config.database).await?;
    let mut txn = db.begin_transaction().await?;

    let found = PostgresServiceRepository
        .set_active(&mut txn, id, active, TimeServiceImpl.now())
        .await?;
    ensure!(found, "Service {} does not exist", *id);
    txn.commit().await?;

    info!("Service has been updated");

    Ok(())
}
