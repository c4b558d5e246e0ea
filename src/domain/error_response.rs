use serde::{Deserialize, Serialize};

/// JSON body of every error response of the contact endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
