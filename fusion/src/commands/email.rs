use anyhow::ensure;
use clap::Subcommand;
use fusion_config::Config;
use fusion_email_contracts::{ContentType, Email, EmailService};
use fusion_models::email_address::EmailAddress;

use crate::email;

#[derive(Debug, Subcommand)]
pub enum EmailCommand {
    /// Test email deliverability
    Test { recipient: EmailAddress },
}

impl EmailCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            EmailCommand::Test { recipient } => test(config, recipient).await,
        }
    }
}

async fn test(config: Config, recipient: EmailAddress) -> anyhow::Result<()> {
    let email_service = email::connect(&config.email)?;

    let ok = email_service
        .send(Email {
            recipients: vec![recipient],
            subject: "Email Deliverability Test".into(),
            body: "Email deliverability seems to be working!".into(),
            content_type: ContentType::Text,
            reply_to: None,
        })
        .await?;

    ensure!(ok, "Failed to send email");

    Ok(())
}
