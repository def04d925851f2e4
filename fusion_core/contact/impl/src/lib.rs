use std::sync::Arc;

use fusion_core_contact_contracts::{ContactFeatureService, ContactSendError};
use fusion_email_contracts::{ContentType, Email, EmailService};
use fusion_models::{contact::ContactSubmission, email_address::EmailAddress};

#[derive(Debug, Clone)]
pub struct ContactFeatureServiceImpl<Email> {
    email: Email,
    config: ContactFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct ContactFeatureConfig {
    /// Fixed recipient list, never derived from user input.
    pub recipients: Arc<[EmailAddress]>,
    pub reply_to: Option<EmailAddress>,
}

impl<Email> ContactFeatureServiceImpl<Email> {
    pub fn new(email: Email, config: ContactFeatureConfig) -> Self {
        Self { email, config }
    }
}

/// Renders the email body: one labeled line per field, in fixed order.
pub fn format_message(submission: &ContactSubmission) -> String {
    format!(
        "Nome: {}\nE-mail: {}\nAssunto: {}\nMensagem: {}",
        *submission.name, submission.email, *submission.subject, *submission.message
    )
}

impl<EmailS> ContactFeatureService for ContactFeatureServiceImpl<EmailS>
where
    EmailS: EmailService,
{
    #[tracing::instrument(skip(self, submission))]
    async fn send_submission(
        &self,
        submission: ContactSubmission,
    ) -> Result<(), ContactSendError> {
        let email = Email {
            recipients: self.config.recipients.to_vec(),
            subject: (*submission.subject).clone(),
            body: format_message(&submission),
            content_type: ContentType::Text,
            reply_to: self.config.reply_to.clone(),
        };

        if !self.email.send(email).await? {
            return Err(ContactSendError::Send);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use fusion_email_contracts::MockEmailService;
    use fusion_models::contact::ContactForm;
    use fusion_utils::assert_matches;

    use super::*;

    fn submission() -> ContactSubmission {
        ContactForm {
            name: "Felicity Jones".into(),
            email: "felicity@gmail.com".into(),
            subject: "Um assunto qualquer".into(),
            message: "Uma mensagem qualquer".into(),
        }
        .validate()
        .unwrap()
    }

    fn config() -> ContactFeatureConfig {
        ContactFeatureConfig {
            recipients: vec!["contato@fusion.com.br".parse().unwrap()].into(),
            reply_to: Some("contato@fusion.com.br".parse().unwrap()),
        }
    }

    fn expected_email(config: &ContactFeatureConfig) -> Email {
        Email {
            recipients: config.recipients.to_vec(),
            subject: "Um assunto qualquer".into(),
            body: "Nome: Felicity Jones\nE-mail: felicity@gmail.com\n\
                   Assunto: Um assunto qualquer\nMensagem: Uma mensagem qualquer"
                .into(),
            content_type: ContentType::Text,
            reply_to: config.reply_to.clone(),
        }
    }

    #[test]
    fn format_message_is_deterministic() {
        // Arrange
        let submission = submission();

        // Act
        let first = format_message(&submission);
        let second = format_message(&submission);

        // Assert
        assert_eq!(first, second);
        assert_eq!(
            first,
            "Nome: Felicity Jones\nE-mail: felicity@gmail.com\n\
             Assunto: Um assunto qualquer\nMensagem: Uma mensagem qualquer"
        );
    }

    #[tokio::test]
    async fn ok() {
        // Arrange
        let config = config();
        let email = MockEmailService::new().with_send(expected_email(&config), true);
        let sut = ContactFeatureServiceImpl::new(email, config);

        // Act
        let result = sut.send_submission(submission()).await;

        // Assert
        result.unwrap();
    }

    #[tokio::test]
    async fn error() {
        // Arrange
        let config = config();
        let email = MockEmailService::new().with_send(expected_email(&config), false);
        let sut = ContactFeatureServiceImpl::new(email, config);

        // Act
        let result = sut.send_submission(submission()).await;

        // Assert
        assert_matches!(result, Err(ContactSendError::Send));
    }

    #[tokio::test]
    async fn send_is_not_idempotent() {
        // Arrange
        let config = config();
        let mut email = MockEmailService::new();
        email
            .expect_send()
            .times(2)
            .with(mockall::predicate::eq(expected_email(&config)))
            .returning(|_| Box::pin(std::future::ready(Ok(true))));
        let sut = ContactFeatureServiceImpl::new(email, config);

        // Act
        sut.send_submission(submission()).await.unwrap();
        sut.send_submission(submission()).await.unwrap();

        // Assert: two identical submissions produce two transport calls,
        // enforced by the `times(2)` expectation above.
    }
}
