//! Client-side session state for PrepSeries.
//!
//! Two roles (admin, student) carry independent authenticated flags backed by
//! a persisted key/value store, so a reload re-derives them instead of
//! starting signed out. The storage capability is a small trait with a
//! browser-localStorage implementation on WASM targets and an in-memory map
//! everywhere else.
//!
//! Backend sign-out is fire-and-forget by design: local flags clear whether
//! or not the external call lands, so a failed sign-out can leave the backend
//! session alive while the client looks signed out.

mod error;
mod session;
mod store;

pub use error::SessionError;
pub use session::{Role, SessionStore};
pub use store::{KeyValueStore, MemoryStore, PlatformStore};

#[cfg(target_arch = "wasm32")]
pub use store::BrowserStore;
