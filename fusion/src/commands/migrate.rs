use clap::Subcommand;
use fusion_config::Config;
use fusion_persistence_postgres::{MigrationStatus, PostgresDatabase};

use crate::database;

#[derive(Debug, Subcommand)]
pub enum MigrateCommand {
    /// List all pending and applied migrations
    #[command(aliases(["status", "s", "l"]))]
    List,
    /// Apply all pending migrations
    #[command(aliases(["u"]))]
    Up {
        /// Only apply the next `n` migrations
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },
    /// Revert the last migration
    #[command(aliases(["d"]))]
    Down {
        /// Revert the last `n` migrations
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,
        #[arg(long, required = true)]
        force: bool,
    },
    /// Reset the database and delete all data
    Reset {
        #[arg(long, required = true)]
        force: bool,
    },
}

impl MigrateCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        let db = database::connect(&config.database).await?;
        match self {
            Self::List => list(db).await,
            Self::Up { count } => up(db, count).await,
            Self::Down { count, force: _ } => down(db, Some(count)).await,
            Self::Reset { force: _ } => reset(db).await,
        }
    }
}

async fn list(db: PostgresDatabase) -> anyhow::Result<()> {
    for MigrationStatus { migration, applied } in db.list_migrations().await? {
        if applied {
            println!("[applied] {}", migration.name);
        } else {
            println!("[pending] {}", migration.name);
        }
    }

    Ok(())
}

async fn up(db: PostgresDatabase, cnt: Option<usize>) -> anyhow::Result<()> {
    migration_logs(&db.run_migrations(cnt).await?, "applied");
    Ok(())
}

async fn down(db: PostgresDatabase, cnt: Option<usize>) -> anyhow::Result<()> {
    migration_logs(&db.revert_migrations(cnt).await?, "reverted");
    Ok(())
}

async fn reset(db: PostgresDatabase) -> anyhow::Result<()> {
    db.reset().await?;
    println!("Database reset successful");

    Ok(())
}

fn migration_logs(logs: &[&str], action: &str) {
    let mut none = true;
    for &name in logs {
        println!("[{action}] {name}");
        none = false;
    }
    if none {
        println!("No migrations have been {action}.");
    }
}
