//! Cart and line item types.

use crate::ids::ItemId;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A single entry in the cart referencing a purchasable plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Unique item identifier (the plan's id for catalog items).
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Current price in whole rupees.
    pub price: i64,
    /// Pre-discount price in whole rupees.
    pub original_price: i64,
    /// Category tag (e.g. "test-series").
    pub kind: String,
}

impl LineItem {
    /// How much the discount saves on this item.
    pub fn savings(&self) -> i64 {
        self.original_price - self.price
    }
}

/// A shopping cart: insertion-ordered line items, unique by id.
///
/// [`Cart::add`] is the only insertion path and refuses duplicates, so
/// id-uniqueness holds by construction. No cart operation can fail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item unless its id is already present.
    ///
    /// Returns whether the item was added.
    pub fn add(&mut self, item: LineItem) -> bool {
        if self.contains(&item.id) {
            debug!(id = %item.id, "duplicate add ignored");
            return false;
        }
        debug!(id = %item.id, "item added to cart");
        self.items.push(item);
        true
    }

    /// Remove every item matching the id.
    ///
    /// Removing an absent id is a no-op. Returns whether anything was
    /// removed.
    pub fn remove(&mut self, id: &ItemId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|item| &item.id != id);
        let removed = self.items.len() < len_before;
        if removed {
            debug!(%id, "item removed from cart");
        }
        removed
    }

    /// Whether an item with this id is in the cart.
    pub fn contains(&self, id: &ItemId) -> bool {
        self.items.iter().any(|item| &item.id == id)
    }

    /// Number of line items, as shown in the navbar badge.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Sum of current prices.
    pub fn total(&self) -> i64 {
        self.items.iter().map(|item| item.price).sum()
    }

    /// Sum of pre-discount prices.
    pub fn original_total(&self) -> i64 {
        self.items.iter().map(|item| item.original_price).sum()
    }

    /// Total discount across the cart.
    pub fn savings(&self) -> i64 {
        self.items.iter().map(LineItem::savings).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, price: i64) -> LineItem {
        LineItem {
            id: ItemId::new(id),
            name: format!("Item {id}"),
            price,
            original_price: price * 2,
            kind: "test-series".to_string(),
        }
    }

    #[test]
    fn test_add_item() {
        let mut cart = Cart::new();
        assert!(cart.add(item("plan-1", 700)));
        assert_eq!(cart.len(), 1);
        assert!(cart.contains(&ItemId::new("plan-1")));
    }

    #[test]
    fn test_duplicate_add_is_noop() {
        let mut cart = Cart::new();
        assert!(cart.add(item("plan-1", 700)));
        assert!(!cart.add(item("plan-1", 999)));
        assert_eq!(cart.len(), 1);
        // First write wins.
        assert_eq!(cart.items()[0].price, 700);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = Cart::new();
        cart.add(item("plan-2", 875));
        cart.add(item("plan-1", 700));
        cart.add(item("plan-3", 350));
        let ids: Vec<&str> = cart.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["plan-2", "plan-1", "plan-3"]);
    }

    #[test]
    fn test_remove_item() {
        let mut cart = Cart::new();
        cart.add(item("plan-1", 700));
        cart.add(item("plan-2", 875));
        assert!(cart.remove(&ItemId::new("plan-1")));
        assert_eq!(cart.len(), 1);
        assert!(!cart.contains(&ItemId::new("plan-1")));
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let mut cart = Cart::new();
        cart.add(item("plan-1", 700));
        assert!(!cart.remove(&ItemId::new("plan-9")));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_totals() {
        let mut cart = Cart::new();
        cart.add(item("plan-1", 700));
        cart.add(item("plan-2", 875));
        assert_eq!(cart.total(), 1575);
        assert_eq!(cart.original_total(), 3150);
        assert_eq!(cart.savings(), 1575);
    }

    #[test]
    fn test_empty_cart() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.len(), 0);
        assert_eq!(cart.total(), 0);
    }
}
