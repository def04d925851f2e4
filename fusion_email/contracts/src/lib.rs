use std::future::Future;

use fusion_models::email_address::EmailAddress;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait EmailService: Send + Sync + 'static {
    /// Attempts to deliver the given email exactly once.
    ///
    /// Returns `Ok(false)` if the transport rejected the message. There is no
    /// deduplication: calling `send` twice transmits twice.
    fn send(&self, email: Email) -> impl Future<Output = anyhow::Result<bool>> + Send;

    /// Verify the connection to the mail transport.
    fn ping(&self) -> impl Future<Output = anyhow::Result<()>> + Send;
}

/// A transport-agnostic outgoing message envelope.
///
/// The sender address is not part of the envelope: it is fixed configuration
/// owned by the transport implementation, so user input can never reach the
/// `From` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    pub recipients: Vec<EmailAddress>,
    pub subject: String,
    pub body: String,
    pub content_type: ContentType,
    pub reply_to: Option<EmailAddress>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Text,
    Html,
}

#[cfg(feature = "mock")]
impl MockEmailService {
    pub fn with_send(mut self, email: Email, result: bool) -> Self {
        self.expect_send()
            .once()
            .with(mockall::predicate::eq(email))
            .return_once(move |_| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_ping(mut self, ok: bool) -> Self {
        self.expect_ping().once().return_once(move || {
            Box::pin(std::future::ready(if ok {
                Ok(())
            } else {
                Err(anyhow::anyhow!("smtp server unreachable"))
            }))
        });
        self
    }
}
