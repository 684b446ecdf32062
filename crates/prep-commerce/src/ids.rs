//! Newtype IDs for type-safe identifiers.
//!
//! Using newtypes keeps a plan identifier from being confused with a cart
//! item identifier, even though both are strings on the wire.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($name:ident) => {
        /// A unique identifier.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(PlanId);
define_id!(ItemId);

impl From<&PlanId> for ItemId {
    /// A plan added to the cart keeps its identifier, which is what makes
    /// duplicate adds detectable.
    fn from(id: &PlanId) -> Self {
        ItemId::new(id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = PlanId::new("plan-1");
        assert_eq!(id.as_str(), "plan-1");
        assert_eq!(format!("{id}"), "plan-1");
    }

    #[test]
    fn test_id_equality() {
        assert_eq!(ItemId::new("same"), ItemId::new("same"));
        assert_ne!(ItemId::new("a"), ItemId::new("b"));
    }

    #[test]
    fn test_item_id_from_plan_id() {
        let plan = PlanId::new("plan-2");
        let item = ItemId::from(&plan);
        assert_eq!(item.as_str(), "plan-2");
    }
}
