//! Commerce domain types for the PrepSeries storefront.
//!
//! - **Cart**: insertion-ordered line items, unique by id. Adding a duplicate
//!   id is a no-op, as is removing an absent one; cart mutation never fails.
//! - **Plans**: the pricing catalog, seeded with the default test-series
//!   plans and replaceable wholesale by the admin panel. Prices are whole
//!   rupees with percentage discounts.
//!
//! Everything here is plain synchronous state owned by the composition root;
//! persistence goes through the external backend as opaque JSON.

pub mod cart;
pub mod error;
pub mod ids;
pub mod plans;

pub use cart::{Cart, LineItem};
pub use error::CommerceError;
pub use ids::{ItemId, PlanId};
pub use plans::{Plan, PlanCatalog};
