use std::time::Duration;

use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;

use crate::domain::EmailAddress;

/// Client for a Resend-compatible transactional email API.
pub struct EmailClient {
    http_client: Client,
    base_url: String,
    sender: EmailAddress,
    authorization_token: Secret<String>,
}

/// A message ready to be handed to the provider.
pub struct OutgoingEmail<'a> {
    pub recipient: &'a EmailAddress,
    pub reply_to: &'a str,
    pub subject: &'a str,
    pub html_content: &'a str,
    pub text_content: &'a str,
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: Vec<&'a str>,
    reply_to: &'a str,
    subject: &'a str,
    html: &'a str,
    text: &'a str,
}

impl EmailClient {
    pub fn new(
        base_url: String,
        sender: EmailAddress,
        authorization_token: Secret<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, anyhow::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build()?;
        Ok(Self {
            http_client,
            base_url,
            sender,
            authorization_token,
        })
    }

    pub fn sender(&self) -> &EmailAddress {
        &self.sender
    }

    /// Sends a single email, returning the provider's response payload untouched.
    #[tracing::instrument(
        name = "Sending an email through the provider",
        skip_all,
        fields(recipient = %email.recipient)
    )]
    pub async fn send_email(
        &self,
        email: &OutgoingEmail<'_>,
    ) -> Result<serde_json::Value, reqwest::Error> {
        let url = format!("{}/emails", self.base_url.trim_end_matches('/'));
        let request_body = SendEmailRequest {
            from: self.sender.as_ref(),
            to: vec![email.recipient.as_ref()],
            reply_to: email.reply_to,
            subject: email.subject,
            html: email.html_content,
            text: email.text_content,
        };
        self.http_client
            .post(&url)
            .bearer_auth(self.authorization_token.expose_secret())
            .json(&request_body)
            .send()
            .await?
            .error_for_status()?
            .json::<serde_json::Value>()
            .await
    }
}
