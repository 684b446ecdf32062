//! In-memory backend for tests and native development.

use crate::client::{BackendClient, StudentProfile};
use crate::BackendError;
use async_trait::async_trait;
use prep_commerce::PlanCatalog;
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::debug;

/// An in-memory [`BackendClient`] with a fixed credential table, a catalog
/// slot, and a blob map.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    admins: Mutex<HashMap<String, String>>,
    students: Mutex<HashMap<String, String>>,
    catalog: Mutex<Option<String>>,
    blobs: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryBackend {
    /// An empty backend that rejects every credential.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an admin credential.
    pub fn with_admin(self, email: impl Into<String>, password: impl Into<String>) -> Self {
        self.admins
            .lock()
            .expect("credential table poisoned")
            .insert(email.into(), password.into());
        self
    }

    /// Register a student credential.
    pub fn with_student(self, email: impl Into<String>, password: impl Into<String>) -> Self {
        self.students
            .lock()
            .expect("credential table poisoned")
            .insert(email.into(), password.into());
        self
    }

    fn lock<T>(mutex: &Mutex<T>) -> Result<std::sync::MutexGuard<'_, T>, BackendError> {
        mutex
            .lock()
            .map_err(|e| BackendError::Unavailable(e.to_string()))
    }
}

#[async_trait]
impl BackendClient for MemoryBackend {
    async fn authenticate_admin(&self, email: &str, password: &str) -> Result<(), BackendError> {
        let admins = Self::lock(&self.admins)?;
        match admins.get(email) {
            Some(stored) if stored == password => {
                debug!(email, "admin authenticated");
                Ok(())
            }
            _ => Err(BackendError::InvalidCredentials),
        }
    }

    async fn authenticate_student(
        &self,
        email: &str,
        password: &str,
    ) -> Result<StudentProfile, BackendError> {
        let students = Self::lock(&self.students)?;
        match students.get(email) {
            Some(stored) if stored == password => {
                debug!(email, "student authenticated");
                Ok(StudentProfile {
                    email: email.to_string(),
                    display_name: None,
                })
            }
            _ => Err(BackendError::InvalidCredentials),
        }
    }

    async fn sign_out(&self) -> Result<(), BackendError> {
        debug!("backend session ended");
        Ok(())
    }

    async fn read_plan_catalog(&self) -> Result<Option<PlanCatalog>, BackendError> {
        let slot = Self::lock(&self.catalog)?;
        match slot.as_deref() {
            Some(json) => Ok(Some(PlanCatalog::from_json(json)?)),
            None => Ok(None),
        }
    }

    async fn write_plan_catalog(&self, catalog: &PlanCatalog) -> Result<(), BackendError> {
        let json = catalog.to_json()?;
        *Self::lock(&self.catalog)? = Some(json);
        Ok(())
    }

    async fn upload_blob(&self, path: &str, bytes: Vec<u8>) -> Result<String, BackendError> {
        Self::lock(&self.blobs)?.insert(path.to_string(), bytes);
        Ok(path.to_string())
    }

    async fn download_blob(&self, path: &str) -> Result<Vec<u8>, BackendError> {
        Self::lock(&self.blobs)?
            .get(path)
            .cloned()
            .ok_or_else(|| BackendError::NotFound(path.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend() -> MemoryBackend {
        MemoryBackend::new()
            .with_admin("admin@prepseries.in", "admin-pass")
            .with_student("student@example.com", "student-pass")
    }

    #[tokio::test]
    async fn test_admin_authentication() {
        let backend = backend();
        backend
            .authenticate_admin("admin@prepseries.in", "admin-pass")
            .await
            .unwrap();

        let wrong = backend
            .authenticate_admin("admin@prepseries.in", "wrong")
            .await;
        assert!(matches!(wrong, Err(BackendError::InvalidCredentials)));

        let unknown = backend.authenticate_admin("nobody@x.com", "admin-pass").await;
        assert!(matches!(unknown, Err(BackendError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_student_authentication_returns_profile() {
        let backend = backend();
        let profile = backend
            .authenticate_student("student@example.com", "student-pass")
            .await
            .unwrap();
        assert_eq!(profile.email, "student@example.com");
    }

    #[tokio::test]
    async fn test_catalog_round_trip() {
        let backend = backend();
        assert!(backend.read_plan_catalog().await.unwrap().is_none());

        let catalog = PlanCatalog::seed();
        backend.write_plan_catalog(&catalog).await.unwrap();
        let restored = backend.read_plan_catalog().await.unwrap().unwrap();
        assert_eq!(restored, catalog);
    }

    #[tokio::test]
    async fn test_blob_round_trip() {
        let backend = backend();
        let path = backend
            .upload_blob("materials/notes.pdf", b"contents".to_vec())
            .await
            .unwrap();
        assert_eq!(path, "materials/notes.pdf");

        let bytes = backend.download_blob("materials/notes.pdf").await.unwrap();
        assert_eq!(bytes, b"contents");

        let missing = backend.download_blob("materials/other.pdf").await;
        assert!(matches!(missing, Err(BackendError::NotFound(_))));
    }
}
