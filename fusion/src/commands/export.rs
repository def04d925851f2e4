use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use fusion_config::Config;
use fusion_persistence_contracts::{
    roles::RoleRepository, services::ServiceRepository, team_members::TeamMemberRepository,
    Database,
};
use fusion_persistence_postgres::{
    roles::PostgresRoleRepository, services::PostgresServiceRepository,
    team_members::PostgresTeamMemberRepository,
};
use serde::Serialize;

use crate::database;

/// Serializes all rows of the three content tables to pretty-printed JSON
/// files, active and inactive alike.
#[derive(Debug, Args)]
pub struct ExportCommand {
    /// Directory to write the JSON files to
    #[arg(long, default_value = ".")]
    out: PathBuf,
}

impl ExportCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        let db = database::connect(&config.database).await?;
        let mut txn = db.begin_transaction().await?;

        let roles = PostgresRoleRepository.list(&mut txn).await?;
        let services = PostgresServiceRepository.list(&mut txn).await?;
        let team_members = PostgresTeamMemberRepository.list(&mut txn).await?;

        std::fs::create_dir_all(&self.out)
            .with_context(|| format!("Failed to create {}", self.out.display()))?;
        write_json(&self.out.join("roles.json"), &roles)?;
        write_json(&self.out.join("services.json"), &services)?;
        write_json(&self.out.join("team_members.json"), &team_members)?;

        println!("[roles] {} rows", roles.len());
        println!("[services] {} rows", services.len());
        println!("[team_members] {} rows", team_members.len());
        println!("Backups gerados com sucesso!");

        Ok(())
    }
}

fn write_json<T: Serialize>(path: &Path, rows: &[T]) -> anyhow::Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    serde_json::to_writer_pretty(std::io::BufWriter::new(file), rows)
        .with_context(|| format!("Failed to write {}", path.display()))
}
