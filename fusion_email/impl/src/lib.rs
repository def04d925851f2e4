use std::time::Duration;

use anyhow::{anyhow, Context};
use fusion_email_contracts::{ContentType, Email, EmailService};
use fusion_models::email_address::EmailAddress;
use fusion_utils::Apply;
use lettre::{
    message::{header, MessageBuilder},
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

#[derive(Debug, Clone)]
pub struct EmailServiceImpl {
    from: EmailAddress,
    transport: AsyncSmtpTransport<Tokio1Executor>,
    send_timeout: Duration,
}

impl EmailServiceImpl {
    pub fn new(url: &str, from: EmailAddress, send_timeout: Duration) -> anyhow::Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::from_url(url)?.build();

        Ok(Self {
            from,
            transport,
            send_timeout,
        })
    }
}

impl EmailService for EmailServiceImpl {
    async fn send(&self, email: Email) -> anyhow::Result<bool> {
        let mut builder = Message::builder().from(self.from.as_str().parse()?);
        for recipient in &email.recipients {
            builder = builder.to(recipient.as_str().parse()?);
        }
        let message = builder
            .apply_map(
                email.reply_to.map(|x| x.as_str().parse()).transpose()?,
                MessageBuilder::reply_to,
            )
            .subject(email.subject)
            .header(match email.content_type {
                ContentType::Text => header::ContentType::TEXT_PLAIN,
                ContentType::Html => header::ContentType::TEXT_HTML,
            })
            .body(email.body)?;

        tokio::time::timeout(self.send_timeout, self.transport.send(message))
            .await
            .context("Timed out sending email")?
            .map(|response| response.is_positive())
            .map_err(Into::into)
    }

    async fn ping(&self) -> anyhow::Result<()> {
        self.transport
            .test_connection()
            .await?
            .then_some(())
            .ok_or_else(|| anyhow!("Failed to ping smtp server"))
    }
}
