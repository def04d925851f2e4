use std::future::Future;

use fusion_models::contact::ContactSubmission;
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFeatureService: Send + Sync + 'static {
    /// Formats the validated submission into an email and hands it to the
    /// mail transport. Exactly one delivery attempt is made; a failed send is
    /// terminal for this submission.
    fn send_submission(
        &self,
        submission: ContactSubmission,
    ) -> impl Future<Output = Result<(), ContactSendError>> + Send;
}

#[derive(Debug, Error)]
pub enum ContactSendError {
    #[error("Failed to send the contact email.")]
    Send,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockContactFeatureService {
    pub fn with_send_submission(
        mut self,
        submission: ContactSubmission,
        result: Result<(), ContactSendError>,
    ) -> Self {
        self.expect_send_submission()
            .once()
            .with(mockall::predicate::eq(submission))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}
