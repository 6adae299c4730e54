//! # Cart Logic
//!
//! The cart merge function and the values derived from a cart.
//!
//! ## Add To Cart Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  add_to_cart(&cart, &product)                                           │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  line with id == product.id?                                            │
//! │     ├── yes ──► copy of cart, that line's quantity + 1                  │
//! │     └── no  ──► copy of cart + CartItem { product, quantity: 1 }        │
//! │                                                                         │
//! │  The input cart is borrowed immutably and never changes.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::trace;
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Cart, CartItem, Product};

/// Returns a new cart with `product` added.
///
/// An existing line for the same id gets its quantity increased by one and
/// keeps its position; otherwise a new line with quantity 1 is appended. All
/// other lines are carried over unchanged.
///
/// Product data is not validated: whatever `product` holds is what lands in
/// the cart. The snapshot of an existing line is not refreshed.
pub fn add_to_cart(cart: &Cart, product: &Product) -> Cart {
    let mut items = cart.items.clone();

    match items.iter_mut().find(|item| item.id == product.id) {
        Some(item) => {
            item.quantity = item.quantity.saturating_add(1);
            trace!(product_id = %product.id, quantity = item.quantity, "increased cart line");
        }
        None => {
            items.push(CartItem::new(product));
            trace!(product_id = %product.id, "appended cart line");
        }
    }

    Cart { items }
}

/// Sum of price × quantity over every line. An empty cart totals zero.
pub fn cart_total(cart: &Cart) -> Money {
    cart.items.iter().map(CartItem::line_total).sum()
}

/// Cart totals summary for responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    pub item_count: usize,
    pub total_quantity: u64,
    pub total: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            total: cart_total(cart),
        }
    }
}
