//! External backend client surface for PrepSeries.
//!
//! Authentication, catalog persistence, and course-material blobs live on a
//! managed third-party platform. Only the call surface matters to the
//! storefront, so this crate defines it as the [`BackendClient`] trait and
//! ships [`MemoryBackend`], the in-memory implementation used by tests and
//! native development.
//!
//! The storefront treats these calls as fire-and-forget: local state (session
//! flags, the in-memory catalog) is updated without awaiting completion.
//! In particular, a failed [`BackendClient::sign_out`] leaves the remote
//! session alive while the client has already cleared its flags.

mod client;
mod error;
mod memory;

pub use client::{BackendClient, StudentProfile};
pub use error::BackendError;
pub use memory::MemoryBackend;
