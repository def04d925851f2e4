use anyhow::{ensure, Context};
use clap::Subcommand;
use fusion_config::Config;
use fusion_models::content::{Role, RoleId};
use fusion_persistence_contracts::{roles::RoleRepository, Database, Transaction};
use fusion_persistence_postgres::roles::PostgresRoleRepository;
use fusion_shared_contracts::{id::IdService, time::TimeService};
use fusion_shared_impl::{id::IdServiceImpl, time::TimeServiceImpl};
use tracing::info;
use uuid::Uuid;

use crate::database;

#[derive(Debug, Subcommand)]
pub enum AdminRoleCommand {
    /// Create a new role
    #[command(aliases(["c", "new", "n", "+"]))]
    Create {
        /// The title of the role, e.g. "Desenvolvedor"
        title: String,
    },
    /// List all roles
    #[command(aliases(["ls", "l"]))]
    List,
    /// Reactivate a role
    Activate { id: Uuid },
    /// Deactivate a role without deleting it
    Deactivate { id: Uuid },
}

impl AdminRoleCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            AdminRoleCommand::Create { title } => create(config, title).await,
            AdminRoleCommand::List => list(config).await,
            AdminRoleCommand::Activate { id } => set_active(config, id.into(), true).await,
            AdminRoleCommand::Deactivate { id } => set_active(config, id.into(), false).await,
        }
    }
}

async fn create(config: Config, title: String) -> anyhow::Result<()> {
    let db = database::connect(&config.database).await?;
    let mut txn = db.begin_transaction().await?;

    let now = TimeServiceImpl.now();
    let role = Role {
        id: IdServiceImpl.generate(),
        title: title.try_into()?,
        active: true,
        created: now,
        updated: now,
    };

    PostgresRoleRepository
        .create(&mut txn, &role)
        .await
        .context("Failed to create role")?;
    txn.commit().await?;

    info!("Role has been created:\n{role:#?}");

    Ok(())
}

async fn list(config: Config) -> anyhow::Result<()> {
    let db = database::connect(&config.database).await?;
    let mut txn = db.begin_transaction().await?;

    for role in PostgresRoleRepository.list(&mut txn).await? {
        let marker = if role.active { "active" } else { "inactive" };
        println!("[{marker}] {} {}", *role.id, role.title.as_str());
    }

    Ok(())
}

async fn set_active(config: Config, id: RoleId, active: bool) -> anyhow::Result<()> {
    let db = database::connect(&config.database).await?;
    let mut txn = db.begin_transaction().await?;

    let found = PostgresRoleRepository
        .set_active(&mut txn, id, active, TimeServiceImpl.now())
        .await?;
    ensure!(found, "Role {} does not exist", *id);
    txn.commit().await?;

    info!("Role has been updated");

    Ok(())
}
