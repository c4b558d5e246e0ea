use actix_web::{http::StatusCode, web, HttpResponse, ResponseError};
use anyhow::Context;
use serde::Deserialize;
use tracing::field::display;

use crate::{
    domain::{ContactSubmission, ErrorResponse},
    email_client::{EmailClient, OutgoingEmail},
    email_template::ContactEmailTemplate,
    startup::{ContactRecipient, SiteName},
    utils::error_chain_fmt,
};

/// Raw request body. Fields stay optional so absence is reported as a 400, not a parse failure.
#[derive(Deserialize)]
pub struct ContactRequest {
    name: Option<String>,
    email: Option<String>,
    subject: Option<String>,
    message: Option<String>,
}

fn required(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl TryFrom<ContactRequest> for ContactSubmission {
    type Error = String;

    fn try_from(value: ContactRequest) -> Result<Self, Self::Error> {
        let mut missing = Vec::new();
        let name = required(value.name);
        let email = required(value.email);
        let subject = required(value.subject);
        let message = required(value.message);
        for (field, present) in [
            ("name", name.is_some()),
            ("email", email.is_some()),
            ("subject", subject.is_some()),
            ("message", message.is_some()),
        ] {
            if !present {
                missing.push(field);
            }
        }
        match (name, email, subject, message) {
            (Some(name), Some(email), Some(subject), Some(message)) => Ok(ContactSubmission {
                name,
                email,
                subject,
                message,
            }),
            _ => Err(format!("Missing required fields: {}", missing.join(", "))),
        }
    }
}

#[derive(thiserror::Error)]
pub enum ContactError {
    #[error("All fields are required")]
    ValidationError,
    #[error("Failed to send message")]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for ContactError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for ContactError {
    fn status_code(&self) -> StatusCode {
        match self {
            ContactError::ValidationError => StatusCode::BAD_REQUEST,
            ContactError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}

fn log_failure(e: anyhow::Error) -> ContactError {
    tracing::error!(
        error.cause_chain = ?e,
        error.message = %e,
        "Failed to process a contact form submission"
    );
    ContactError::UnexpectedError(e)
}

#[tracing::instrument(
    name = "Handling a contact form submission",
    skip(body, email_client, recipient, site_name),
    fields(
        contact_name = tracing::field::Empty,
        contact_email = tracing::field::Empty,
        contact_subject = tracing::field::Empty,
        message_length = tracing::field::Empty
    )
)]
pub async fn contact(
    body: Result<web::Bytes, actix_web::Error>,
    email_client: web::Data<EmailClient>,
    recipient: web::Data<ContactRecipient>,
    site_name: web::Data<SiteName>,
) -> Result<HttpResponse, ContactError> {
    // Oversized or interrupted payloads surface as the generic failure.
    let body = body
        .map_err(|e| anyhow::anyhow!("Failed to read the contact form request body: {}", e))
        .map_err(log_failure)?;
    let request: ContactRequest = serde_json::from_slice(&body)
        .context("Failed to parse the contact form request body.")
        .map_err(log_failure)?;
    record_received(&request);

    let submission: ContactSubmission = request.try_into().map_err(|reason: String| {
        tracing::debug!(%reason, "Rejected an incomplete contact form submission");
        ContactError::ValidationError
    })?;

    let template = ContactEmailTemplate::new(&submission, &site_name.0);
    let subject = template.subject();
    let html_content = template.html();
    let text_content = template.text();
    let provider_response = email_client
        .send_email(&OutgoingEmail {
            recipient: &recipient.0,
            reply_to: &submission.email,
            subject: &subject,
            html_content: &html_content,
            text_content: &text_content,
        })
        .await
        .context("Failed to send the contact form email.")
        .map_err(log_failure)?;

    tracing::info!(provider_response = %provider_response, "Contact form email accepted");
    Ok(HttpResponse::Ok().json(provider_response))
}

fn record_received(request: &ContactRequest) {
    let span = tracing::Span::current();
    if let Some(name) = &request.name {
        span.record("contact_name", display(name));
    }
    if let Some(email) = &request.email {
        span.record("contact_email", display(email));
    }
    if let Some(subject) = &request.subject {
        span.record("contact_subject", display(subject));
    }
    let message_length = request
        .message
        .as_deref()
        .map(|m| m.chars().count())
        .unwrap_or(0);
    span.record("message_length", message_length);
    tracing::info!("Received contact form submission");
}
