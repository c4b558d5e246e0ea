mod contact_submission;
mod email_address;
mod error_response;

pub use contact_submission::ContactSubmission;
pub use email_address::EmailAddress;
pub use error_response::ErrorResponse;
