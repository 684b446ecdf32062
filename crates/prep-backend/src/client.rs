//! The backend client trait.

use crate::BackendError;
use async_trait::async_trait;
use prep_commerce::PlanCatalog;
use serde::{Deserialize, Serialize};

/// Profile returned by a successful student authentication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentProfile {
    /// The student's identifier (their email).
    pub email: String,
    /// Optional display name.
    pub display_name: Option<String>,
}

/// The managed backend's call surface, as consumed by the storefront.
///
/// Implementations are opaque collaborators; the storefront never depends on
/// how records or blobs are stored remotely.
#[async_trait]
pub trait BackendClient: Send + Sync {
    /// Authenticate an admin. Success carries no payload; the client keeps
    /// its own persisted flag.
    async fn authenticate_admin(&self, email: &str, password: &str) -> Result<(), BackendError>;

    /// Authenticate a student, returning their profile.
    async fn authenticate_student(
        &self,
        email: &str,
        password: &str,
    ) -> Result<StudentProfile, BackendError>;

    /// End the backend session.
    ///
    /// Callers clear local session state without awaiting this, so a failure
    /// here can leave the remote session alive (accepted, documented risk).
    async fn sign_out(&self) -> Result<(), BackendError>;

    /// Read the persisted plan catalog. `Ok(None)` means none has been
    /// written yet and the seeded defaults apply.
    async fn read_plan_catalog(&self) -> Result<Option<PlanCatalog>, BackendError>;

    /// Persist the plan catalog wholesale.
    async fn write_plan_catalog(&self, catalog: &PlanCatalog) -> Result<(), BackendError>;

    /// Upload a course-material blob, returning its reference path.
    async fn upload_blob(&self, path: &str, bytes: Vec<u8>) -> Result<String, BackendError>;

    /// Download a course-material blob.
    async fn download_blob(&self, path: &str) -> Result<Vec<u8>, BackendError>;
}
