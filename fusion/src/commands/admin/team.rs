use anyhow::{ensure, Context};
use clap::Subcommand;
use fusion_config::Config;
use fusion_models::content::{SocialLink, TeamMember, TeamMemberId};
use fusion_persistence_contracts::{
    roles::RoleRepository, team_members::TeamMemberRepository, Database, Transaction,
};
use fusion_persistence_postgres::{
    roles::PostgresRoleRepository, team_members::PostgresTeamMemberRepository,
};
use fusion_shared_contracts::{id::IdService, time::TimeService};
use fusion_shared_impl::{id::IdServiceImpl, time::TimeServiceImpl};
use tracing::info;
use url::Url;
use uuid::Uuid;

use crate::database;

#[derive(Debug, Subcommand)]
pub enum AdminTeamCommand {
    /// Add a new team member
    #[command(aliases(["c", "new", "n", "+"]))]
    Create {
        /// The display name of the team member
        name: String,
        /// The id of the member's role
        role_id: Uuid,
        /// A short bio shown on the landing page
        bio: String,
        /// URL of the profile picture
        #[arg(long)]
        image_url: Option<Url>,
        #[arg(long)]
        facebook: Option<String>,
        #[arg(long)]
        twitter: Option<String>,
        #[arg(long)]
        instagram: Option<String>,
    },
    /// List all team members
    #[command(aliases(["ls", "l"]))]
    List,
    /// Reactivate a team member
    Activate { id: Uuid },
    /// Deactivate a team member without deleting them
    Deactivate { id: Uuid },
}

impl AdminTeamCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            AdminTeamCommand::Create {
                name,
                role_id,
                bio,
                image_url,
                facebook,
                twitter,
                instagram,
            } => {
                create(
                    config, name, role_id, bio, image_url, facebook, twitter, instagram,
                )
                .await
            }
            AdminTeamCommand::List => list(config).await,
            AdminTeamCommand::Activate { id } => set_active(config, id.into(), true).await,
            AdminTeamCommand::Deactivate { id } => set_active(config, id.into(), false).await,
        }
    }
}

#[allow(clippy::too_many_arguments, reason = "one per cli argument")]
async fn create(
    config: Config,
    name: String,
    role_id: Uuid,
    bio: String,
    image_url: Option<Url>,
    facebook: Option<String>,
    twitter: Option<String>,
    instagram: Option<String>,
) -> anyhow::Result<()> {
    let db = database::connect(&config.database).await?;
    let mut txn = db.begin_transaction().await?;

    let role = PostgresRoleRepository.get(&mut txn, role_id.into()).await?;
    ensure!(role.is_some(), "Role {role_id} does not exist");

    let now = TimeServiceImpl.now();
    let member = TeamMember {
        id: IdServiceImpl.generate(),
        name: name.try_into()?,
        role_id: role_id.into(),
        bio: bio.try_into()?,
        image_url,
        facebook: social_link(facebook)?,
        twitter: social_link(twitter)?,
        instagram: social_link(instagram)?,
        active: true,
        created: now,
        updated: now,
    };

    PostgresTeamMemberRepository
        .create(&mut txn, &member)
        .await
        .context("Failed to create team member")?;
    txn.commit().await?;

    info!("Team member has been created:\n{member:#?}");

    Ok(())
}

fn social_link(link: Option<String>) -> anyhow::Result<SocialLink> {
    match link {
        Some(link) => Ok(link.try_into()?),
        None => Ok(SocialLink::default()),
    }
}

async fn list(config: Config) -> anyhow::Result<()> {
    let db = database::connect(&config.database).await?;
    let mut txn = db.begin_transaction().await?;

    for member in PostgresTeamMemberRepository.list(&mut txn).await? {
        let marker = if member.active { "active" } else { "inactive" };
        println!(
            "[{marker}] {} {} (role {})",
            *member.id,
            member.name.as_str(),
            *member.role_id
        );
    }

    Ok(())
}

async fn set_active(config: Config, id: TeamMemberId, active: bool) -> anyhow::Result<()> {
    let db = database::connect(&config.database).await?;
    let mut txn = db.begin_transaction().await?;

    let found = PostgresTeamMemberRepository
        .set_active(&mut txn, id, active, TimeServiceImpl.now())
        .await?;
    ensure!(found, "Team member {} does not exist", *id);
    txn.commit().await?;

    info!("Team member has been updated");

    Ok(())
}
