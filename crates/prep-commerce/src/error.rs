//! Commerce error types.

use thiserror::Error;

/// Errors from commerce operations.
///
/// Cart mutation is deliberately infallible; these cover catalog lookups and
/// the JSON round-trip to the external backend.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Plan not found in the catalog.
    #[error("Plan not found: {0}")]
    PlanNotFound(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
