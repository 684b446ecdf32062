//! Session error types.

use thiserror::Error;

/// Errors from the persisted key/value capability.
#[derive(Error, Debug)]
pub enum SessionError {
    /// The platform store could not be opened.
    #[error("Persisted storage unavailable: {0}")]
    StoreUnavailable(String),

    /// A read or write against the store failed.
    #[error("Storage operation failed: {0}")]
    StoreError(String),
}
