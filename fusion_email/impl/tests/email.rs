//! End-to-end delivery test against a local smtp4dev instance.
//!
//! Runs only when the `SMTP4DEV_URL` environment variable is set (e.g.
//! `http://localhost:5000/`); otherwise the test is a no-op so the suite can
//! run without a mail sandbox.

use std::time::{Duration, Instant};

use fusion_email_contracts::{ContentType, Email, EmailService};
use fusion_email_impl::EmailServiceImpl;
use fusion_models::email_address::EmailAddress;
use serde::Deserialize;
use uuid::Uuid;

#[tokio::test]
async fn send_email() {
    let Some(client) = setup().await else {
        return;
    };

    let result = client
        .email
        .send(Email {
            recipients: vec!["test@example.com".parse().unwrap()],
            subject: "The Subject".into(),
            body: "Nome: Test\nE-mail: test@example.com".into(),
            content_type: ContentType::Text,
            reply_to: Some("replyto@example.com".parse().unwrap()),
        })
        .await
        .unwrap();

    assert!(result);

    let mail = client.wait_for_mail().await;
    assert_eq!(mail.from, client.from.as_str());
    assert_eq!(mail.to, "test@example.com");
    assert_eq!(mail.subject, "The Subject");

    let details = client.fetch_email_details(mail.id).await;
    assert!(details.plain_text);
    let reply_to = details
        .headers
        .into_iter()
        .find(|h| h.name == "Reply-To")
        .unwrap();
    assert_eq!(reply_to.value, "replyto@example.com");
}

struct TestClient {
    email: EmailServiceImpl,
    from: EmailAddress,
    smtp4dev_url: String,
}

impl TestClient {
    async fn reset(&self) {
        reqwest::Client::new()
            .delete(format!("{}/api/Messages/*", self.smtp4dev_url))
            .send()
            .await
            .unwrap()
            .error_for_status()
            .unwrap();
    }

    async fn wait_for_mail(&self) -> EmailSummary {
        let now = Instant::now();
        while now.elapsed() < Duration::from_secs(2) {
            let mut mailbox = self.fetch_mailbox().await;
            if let Some(mail) = mailbox.pop() {
                return mail;
            }
        }
        panic!("No email received");
    }

    async fn fetch_mailbox(&self) -> Vec<EmailSummary> {
        reqwest::Client::new()
            .get(format!("{}/api/Messages", self.smtp4dev_url))
            .send()
            .await
            .unwrap()
            .error_for_status()
            .unwrap()
            .json::<PaginationResponse<_>>()
            .await
            .unwrap()
            .results
    }

    async fn fetch_email_details(&self, id: Uuid) -> EmailDetails {
        reqwest::Client::new()
            .get(format!("{}/api/Messages/{id}", self.smtp4dev_url))
            .send()
            .await
            .unwrap()
            .error_for_status()
            .unwrap()
            .json()
            .await
            .unwrap()
    }
}

async fn setup() -> Option<TestClient> {
    let smtp4dev_url = std::env::var("SMTP4DEV_URL")
        .ok()?
        .trim_end_matches('/')
        .to_owned();

    let config = fusion_config::load().unwrap();

    let email = EmailServiceImpl::new(
        &config.email.smtp_url,
        config.email.from.clone(),
        config.email.send_timeout.into(),
    )
    .unwrap();

    let client = TestClient {
        email,
        from: config.email.from,
        smtp4dev_url,
    };

    client.reset().await;

    Some(client)
}

#[derive(Debug, Deserialize)]
struct PaginationResponse<T> {
    results: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct EmailSummary {
    id: Uuid,
    from: String,
    to: String,
    subject: String,
}

#[derive(Debug, Deserialize)]
struct EmailDetails {
    headers: Vec<EmailHeader>,
    #[serde(rename = "hasPlainTextBody")]
    plain_text: bool,
}

#[derive(Debug, Deserialize)]
struct EmailHeader {
    name: String,
    value: String,
}
