//! Backend error types.

use thiserror::Error;

/// Errors from the external backend collaborator.
#[derive(Error, Debug)]
pub enum BackendError {
    /// Credentials rejected.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// A record or blob does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The backend could not be reached or answered abnormally.
    #[error("Backend unavailable: {0}")]
    Unavailable(String),

    /// A stored record failed to decode.
    #[error("Malformed record: {0}")]
    MalformedRecord(String),
}

impl From<prep_commerce::CommerceError> for BackendError {
    fn from(e: prep_commerce::CommerceError) -> Self {
        BackendError::MalformedRecord(e.to_string())
    }
}
