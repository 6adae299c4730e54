//! # Domain Types
//!
//! Core domain types used throughout the shop.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    CartItem     │   │      Cart       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │◄──│  id             │◄──│  items (Vec)    │       │
//! │  │  price (Money)  │   │  product (copy) │   │                 │       │
//! │  │  title          │   │  quantity       │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A `CartItem` embeds a full copy of the `Product` it was created from, so
//! the cart renders from its own data and never looks back into the catalog.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product Id
// =============================================================================

/// Identifier of a product. Serializes as a bare number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct ProductId(u64);

impl ProductId {
    #[inline]
    pub const fn new(id: u64) -> Self {
        ProductId(id)
    }

    #[inline]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available for sale. Immutable once the catalog is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique identifier within the catalog.
    pub id: ProductId,

    /// Unit price in the smallest currency unit.
    pub price: Money,

    /// Display name shown in the listing and the cart.
    pub title: String,
}

impl Product {
    pub fn new(id: u64, price: Money, title: impl Into<String>) -> Self {
        Product {
            id: ProductId::new(id),
            price,
            title: title.into(),
        }
    }
}

// =============================================================================
// Cart Item
// =============================================================================

/// One product/quantity pairing within a cart.
///
/// `id` always equals `product.id`; it is kept as its own field so hosts can
/// key line items without reaching into the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartItem {
    pub id: ProductId,

    /// Frozen copy of the product at the time it was first added.
    pub product: Product,

    /// Always at least 1.
    pub quantity: u32,
}

impl CartItem {
    /// Creates a line for `product` with quantity 1.
    pub fn new(product: &Product) -> Self {
        CartItem {
            id: product.id,
            product: product.clone(),
            quantity: 1,
        }
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.product.price * self.quantity
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - At most one item per distinct `id` (adding the same product again
///   increases its quantity)
/// - Items are kept in first-added order
/// - Every quantity is > 0
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Cart {
    pub items: Vec<CartItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Returns the line for `id`, if any.
    pub fn get(&self, id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Number of distinct lines.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of all line quantities.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<Vec<CartItem>> for Cart {
    fn from(items: Vec<CartItem>) -> Self {
        Cart { items }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn shirt() -> Product {
        Product::new(1, Money::from_amount(150_000), "Áo thun nam")
    }

    #[test]
    fn test_cart_item_starts_at_one() {
        let item = CartItem::new(&shirt());
        assert_eq!(item.id, ProductId::new(1));
        assert_eq!(item.quantity, 1);
        assert_eq!(item.product, shirt());
    }

    #[test]
    fn test_line_total() {
        let mut item = CartItem::new(&shirt());
        item.quantity = 3;
        assert_eq!(item.line_total().amount(), 450_000);
    }

    #[test]
    fn test_cart_counts() {
        let mut second = CartItem::new(&Product::new(2, Money::from_amount(250_000), "Áo sơ mi nữ"));
        second.quantity = 4;
        let cart = Cart::from(vec![CartItem::new(&shirt()), second]);

        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.total_quantity(), 5);
        assert!(!cart.is_empty());
        assert_eq!(cart.get(ProductId::new(2)).map(|i| i.quantity), Some(4));
        assert!(cart.get(ProductId::new(9)).is_none());
    }

    #[test]
    fn test_product_json_shape() {
        let json = serde_json::to_value(shirt()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": 1, "price": 150000, "title": "Áo thun nam" })
        );
    }
}
