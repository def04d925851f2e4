use anyhow::Context;
use fusion_config::EmailConfig;
use fusion_email_impl::EmailServiceImpl;

/// Connect to the SMTP server
pub fn connect(config: &EmailConfig) -> anyhow::Result<EmailServiceImpl> {
    EmailServiceImpl::new(
        &config.smtp_url,
        config.from.clone(),
        config.send_timeout.into(),
    )
    .context("Failed to connect to SMTP server")
}
