//! Client-side state of the contact form.
//!
//! Holds the four field values and the per-field error annotations, and only
//! lets a submission reach the network once every field passes the schema.

use std::collections::HashMap;

use validator::{Validate, ValidationErrors};

use crate::{
    contact_client::{ContactApiClient, ContactApiError},
    domain::ContactSubmission,
    utils::error_chain_fmt,
};

/// Subjects offered by the site's dropdown.
///
/// The validator only applies the length rule, so `Inne` is rejected like any other
/// subject shorter than five characters.
pub const SUBJECT_CHOICES: [&str; 5] = [
    "Pożyczka pod hipotekę",
    "Finansowanie deweloperskie",
    "Finansowanie korporacyjne",
    "Planowanie finansowe",
    "Inne",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Subject,
        FormField::Message,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Subject => "subject",
            FormField::Message => "message",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct ContactFormData {
    #[validate(length(min = 2, message = "Imię i nazwisko musi mieć co najmniej 2 znaki"))]
    pub name: String,
    #[validate(email(message = "Proszę wprowadzić poprawny adres email"))]
    pub email: String,
    #[validate(length(min = 5, message = "Temat musi mieć co najmniej 5 znaków"))]
    pub subject: String,
    #[validate(length(min = 10, message = "Wiadomość musi mieć co najmniej 10 znaków"))]
    pub message: String,
}

impl ContactFormData {
    fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Subject => &mut self.subject,
            FormField::Message => &mut self.message,
        }
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }
}

impl From<ContactFormData> for ContactSubmission {
    fn from(data: ContactFormData) -> Self {
        ContactSubmission {
            name: data.name,
            email: data.email,
            subject: data.subject,
            message: data.message,
        }
    }
}

/// One human-readable message per failing field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(HashMap<FormField, String>);

impl FieldErrors {
    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn clear(&mut self, field: FormField) {
        self.0.remove(&field);
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut annotations = HashMap::new();
        for (name, field_errors) in errors.field_errors() {
            let Some(field) = FormField::from_name(&name) else {
                continue;
            };
            let message = field_errors
                .first()
                .and_then(|e| e.message.as_ref())
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("Invalid {}", field.as_str()));
            annotations.insert(field, message);
        }
        FieldErrors(annotations)
    }
}

#[derive(thiserror::Error)]
pub enum SubmitError {
    #[error("Please fix the form errors")]
    Invalid(FieldErrors),
    #[error("Failed to send message")]
    Delivery(#[source] ContactApiError),
}

impl SubmitError {
    /// Text shown to the user under the form.
    ///
    /// Delivery failures always read as a retry-later notice. The server's `error`
    /// string stays available through the source `ContactApiError` for logging.
    pub fn description(&self) -> &'static str {
        match self {
            SubmitError::Invalid(_) => "Some fields need your attention",
            SubmitError::Delivery(_) => "Please try again later",
        }
    }
}

impl std::fmt::Debug for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

#[derive(Debug, Default)]
pub struct ContactForm {
    data: ContactFormData,
    errors: FieldErrors,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> &ContactFormData {
        &self.data
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Stores a new value typed into `field` and drops that field's stale error.
    pub fn update(&mut self, field: FormField, value: impl Into<String>) {
        *self.data.field_mut(field) = value.into();
        self.errors.clear(field);
    }

    /// Replaces the error state wholesale with the outcome of this attempt.
    pub fn validate(&mut self) -> Option<ContactSubmission> {
        match self.data.validate() {
            Ok(()) => {
                self.errors = FieldErrors::default();
                Some(self.data.clone().into())
            }
            Err(e) => {
                self.errors = e.into();
                None
            }
        }
    }

    pub fn reset(&mut self) {
        self.data = ContactFormData::default();
        self.errors = FieldErrors::default();
    }

    /// Validates, then posts the submission once.
    ///
    /// Fields are emptied only when the server accepts the submission.
    pub async fn submit(
        &mut self,
        client: &ContactApiClient,
    ) -> Result<serde_json::Value, SubmitError> {
        let Some(submission) = self.validate() else {
            tracing::info!(
                invalid_fields = self.errors.len(),
                "Please fix the form errors"
            );
            return Err(SubmitError::Invalid(self.errors.clone()));
        };

        match client.send_submission(&submission).await {
            Ok(response) => {
                self.reset();
                Ok(response)
            }
            Err(e) => {
                tracing::warn!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Failed to send message"
                );
                Err(SubmitError::Delivery(e))
            }
        }
    }
}
