use clap::Subcommand;
use fusion_config::Config;
use role::AdminRoleCommand;
use service::AdminServiceCommand;
use team::AdminTeamCommand;

mod role;
mod service;
mod team;

#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// Manage team roles
    #[command(aliases(["r"]))]
    Role {
        #[command(subcommand)]
        command: AdminRoleCommand,
    },
    /// Manage the services displayed on the landing page
    #[command(aliases(["s"]))]
    Service {
        #[command(subcommand)]
        command: AdminServiceCommand,
    },
    /// Manage team members
    #[command(aliases(["t"]))]
    Team {
        #[command(subcommand)]
        command: AdminTeamCommand,
    },
}

impl AdminCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            AdminCommand::Role { command } => command.invoke(config).await,
            AdminCommand::Service { command } => command.invoke(config).await,
            AdminCommand::Team { command } => command.invoke(config).await,
        }
    }
}
