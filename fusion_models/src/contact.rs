use std::collections::BTreeMap;

use nutype::nutype;
use serde::{ser::SerializeMap, Deserialize, Serialize, Serializer};

use crate::email_address::EmailAddress;

/// A contact form submission that has passed validation.
///
/// Instances can only be obtained through [`ContactForm::validate`] or the
/// bounded field constructors, so consumers never see unvalidated input.
/// Submissions are ephemeral: they are formatted into an outgoing email once
/// and then discarded, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: SubmissionName,
    pub email: EmailAddress,
    pub subject: SubmissionSubject,
    pub message: SubmissionMessage,
}

#[nutype(
    validate(not_empty, len_char_max = 100),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct SubmissionName(String);

#[nutype(
    validate(not_empty, len_char_max = 200),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct SubmissionSubject(String);

#[nutype(
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct SubmissionMessage(String);

/// Raw contact form fields, exactly as submitted.
///
/// Keys absent from the request deserialize to empty strings and fail
/// required-field validation. Values are never trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

pub const EMAIL_MAX_CHARS: usize = 100;

const REQUIRED: &str = "Este campo é obrigatório.";
const INVALID_EMAIL: &str = "Informe um endereço de email válido.";

fn max_chars(max: usize) -> String {
    format!("Certifique-se de que o valor tenha no máximo {max} caracteres.")
}

impl ContactForm {
    /// Validates all four fields independently and collects every error.
    ///
    /// There is no fail-fast: a submission missing two fields reports both.
    /// On success the fields are carried over verbatim.
    pub fn validate(self) -> Result<ContactSubmission, FieldErrors> {
        let mut errors = FieldErrors::default();

        let name = SubmissionName::try_new(self.name)
            .map_err(|err| {
                errors.push(
                    ContactField::Name,
                    match err {
                        SubmissionNameError::NotEmptyViolated => REQUIRED.into(),
                        SubmissionNameError::LenCharMaxViolated => max_chars(100),
                    },
                )
            })
            .ok();

        let email = validate_email(&self.email)
            .map_err(|msg| errors.push(ContactField::Email, msg))
            .ok();

        let subject = SubmissionSubject::try_new(self.subject)
            .map_err(|err| {
                errors.push(
                    ContactField::Subject,
                    match err {
                        SubmissionSubjectError::NotEmptyViolated => REQUIRED.into(),
                        SubmissionSubjectError::LenCharMaxViolated => max_chars(200),
                    },
                )
            })
            .ok();

        let message = SubmissionMessage::try_new(self.message)
            .map_err(|err| {
                errors.push(
                    ContactField::Message,
                    match err {
                        SubmissionMessageError::NotEmptyViolated => REQUIRED.into(),
                    },
                )
            })
            .ok();

        match (name, email, subject, message) {
            (Some(name), Some(email), Some(subject), Some(message)) => Ok(ContactSubmission {
                name,
                email,
                subject,
                message,
            }),
            _ => Err(errors),
        }
    }
}

fn validate_email(raw: &str) -> Result<EmailAddress, String> {
    if raw.is_empty() {
        return Err(REQUIRED.into());
    }
    if raw.chars().count() > EMAIL_MAX_CHARS {
        return Err(max_chars(EMAIL_MAX_CHARS));
    }
    let address = raw
        .parse::<EmailAddress>()
        .map_err(|_| INVALID_EMAIL.to_owned())?;
    // local-part "@" domain, domain containing at least one dot
    match raw.rsplit_once('@') {
        Some((_, domain)) if domain.contains('.') => Ok(address),
        _ => Err(INVALID_EMAIL.into()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }
}

impl std::fmt::Display for ContactField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-field validation errors.
///
/// Serializes as a map with all four field keys always present, failing
/// fields carrying one or more human-readable messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<ContactField, Vec<String>>);

impl FieldErrors {
    pub fn push(&mut self, field: ContactField, message: String) {
        self.0.entry(field).or_default().push(message);
    }

    pub fn get(&self, field: ContactField) -> &[String] {
        self.0.get(&field).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn fields(&self) -> impl Iterator<Item = ContactField> + '_ {
        self.0.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for FieldErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ContactField::ALL.len()))?;
        for field in ContactField::ALL {
            map.serialize_entry(field.as_str(), self.get(field))?;
        }
        map.end()
    }
}
