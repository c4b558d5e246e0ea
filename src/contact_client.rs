use reqwest::{Client, StatusCode};

use crate::{
    domain::{ContactSubmission, ErrorResponse},
    utils::error_chain_fmt,
};

const FALLBACK_ERROR: &str = "Failed to send message";

/// HTTP client for the contact endpoint, used by the form to submit.
pub struct ContactApiClient {
    http_client: Client,
    base_url: String,
}

#[derive(thiserror::Error)]
pub enum ContactApiError {
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },
    #[error("Failed to reach the contact endpoint")]
    Transport(#[from] reqwest::Error),
}

impl std::fmt::Debug for ContactApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ContactApiClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http_client: Client::new(),
            base_url,
        }
    }

    #[tracing::instrument(name = "Submitting the contact form", skip_all)]
    pub async fn send_submission(
        &self,
        submission: &ContactSubmission,
    ) -> Result<serde_json::Value, ContactApiError> {
        let url = format!("{}/api/contact", self.base_url.trim_end_matches('/'));
        let response = self.http_client.post(&url).json(submission).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let message = response
            .json::<ErrorResponse>()
            .await
            .map(|body| body.error)
            .unwrap_or_else(|_| FALLBACK_ERROR.into());
        Err(ContactApiError::Rejected { status, message })
    }
}
