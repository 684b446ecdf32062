//! Role flags over the persisted store.

use crate::store::KeyValueStore;
use crate::SessionError;
use tracing::info;

/// Persisted marker for an authenticated admin.
const ADMIN_KEY: &str = "admin_auth";
const ADMIN_MARKER: &str = "true";

/// Persisted student identifier. Presence of any value counts as a signed-in
/// student; there is no separate boolean.
const STUDENT_KEY: &str = "student_email";

/// The two authenticated roles of the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Student,
}

/// Persisted session flags for both roles.
///
/// A flag is never cached in memory: every query re-reads the store, so the
/// state a reload derives is exactly the state queries see. Store failures
/// degrade to "not authenticated" rather than erroring the caller.
pub struct SessionStore<S> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Wrap a key/value store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Whether the role is currently authenticated.
    ///
    /// Admin requires an exact marker match; student only requires that some
    /// identifier is stored. The asymmetry is deliberate and load-bearing for
    /// startup derivation.
    pub fn is_authenticated(&self, role: Role) -> bool {
        match role {
            Role::Admin => matches!(
                self.store.get(ADMIN_KEY),
                Ok(Some(value)) if value == ADMIN_MARKER
            ),
            Role::Student => matches!(self.store.get(STUDENT_KEY), Ok(Some(_))),
        }
    }

    /// Persist the admin flag after a successful admin login.
    pub fn sign_in_admin(&self) -> Result<(), SessionError> {
        self.store.set(ADMIN_KEY, ADMIN_MARKER)?;
        info!("admin session persisted");
        Ok(())
    }

    /// Persist the student identifier after a successful student login.
    pub fn sign_in_student(&self, identifier: &str) -> Result<(), SessionError> {
        self.store.set(STUDENT_KEY, identifier)?;
        info!("student session persisted");
        Ok(())
    }

    /// Clear the role's persisted marker.
    ///
    /// Callers clear local state unconditionally, without waiting for the
    /// external backend's sign-out to complete.
    pub fn sign_out(&self, role: Role) -> Result<(), SessionError> {
        match role {
            Role::Admin => self.store.remove(ADMIN_KEY)?,
            Role::Student => self.store.remove(STUDENT_KEY)?,
        }
        info!(?role, "session cleared");
        Ok(())
    }

    /// The stored student identifier, if any.
    pub fn student_identifier(&self) -> Option<String> {
        self.store.get(STUDENT_KEY).ok().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn sessions() -> SessionStore<MemoryStore> {
        SessionStore::new(MemoryStore::new())
    }

    #[test]
    fn test_starts_signed_out() {
        let sessions = sessions();
        assert!(!sessions.is_authenticated(Role::Admin));
        assert!(!sessions.is_authenticated(Role::Student));
        assert!(sessions.student_identifier().is_none());
    }

    #[test]
    fn test_admin_sign_in_and_out() {
        let sessions = sessions();
        sessions.sign_in_admin().unwrap();
        assert!(sessions.is_authenticated(Role::Admin));
        // Roles are independent.
        assert!(!sessions.is_authenticated(Role::Student));

        sessions.sign_out(Role::Admin).unwrap();
        assert!(!sessions.is_authenticated(Role::Admin));
    }

    #[test]
    fn test_admin_requires_exact_marker() {
        let store = MemoryStore::new();
        store.set("admin_auth", "yes").unwrap();
        let sessions = SessionStore::new(store);
        assert!(!sessions.is_authenticated(Role::Admin));
    }

    #[test]
    fn test_student_flag_derived_from_identifier() {
        let sessions = sessions();
        sessions.sign_in_student("student@example.com").unwrap();
        assert!(sessions.is_authenticated(Role::Student));
        assert_eq!(
            sessions.student_identifier().as_deref(),
            Some("student@example.com")
        );

        sessions.sign_out(Role::Student).unwrap();
        assert!(!sessions.is_authenticated(Role::Student));
        assert!(sessions.student_identifier().is_none());
    }

    #[test]
    fn test_startup_derivation_from_seeded_store() {
        // Simulates a reload: a fresh SessionStore over pre-existing keys.
        let store = MemoryStore::new();
        store.set("admin_auth", "true").unwrap();
        store.set("student_email", "s@example.com").unwrap();

        let sessions = SessionStore::new(store);
        assert!(sessions.is_authenticated(Role::Admin));
        assert!(sessions.is_authenticated(Role::Student));
    }
}
