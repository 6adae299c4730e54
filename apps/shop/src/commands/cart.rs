//! # Cart Commands
//!
//! Commands for reading and growing the cart.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐   add_to_cart    ┌──────────┐   add_to_cart               │
//! │  │  Empty   │─────────────────►│ In Cart  │──────────┐                  │
//! │  │  Cart    │                  │          │◄─────────┘                  │
//! │  └──────────┘                  └──────────┘                             │
//! │                                                                         │
//! │  There is no remove, decrement or clear: the cart only grows until the  │
//! │  app exits.                                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shop_core::{Cart, CartItem, CartTotals, Product, ProductId};
use tracing::debug;

use crate::error::ApiError;
use crate::state::{CartStore, CatalogState};

/// Cart response including items and totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartItem>,
    pub totals: CartTotals,
    /// When the store last replaced the cart
    pub updated_at: DateTime<Utc>,
}

impl CartResponse {
    fn new(cart: &Cart, updated_at: DateTime<Utc>) -> Self {
        CartResponse {
            items: cart.items.clone(),
            totals: CartTotals::from(cart),
            updated_at,
        }
    }
}

/// Gets the current cart contents.
pub fn get_cart(cart: &CartStore) -> CartResponse {
    debug!("get_cart command");
    let (snapshot, updated_at) = cart.snapshot();
    CartResponse::new(&snapshot, updated_at)
}

/// Adds the catalog product with `product_id` to the cart.
///
/// ## Behavior
/// - If product already in cart: quantity increases by one
/// - If product not in cart: added as new line with quantity 1
/// - Unknown id: `NOT_FOUND`, cart unchanged
pub fn add_to_cart(
    catalog: &CatalogState,
    cart: &CartStore,
    product_id: ProductId,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, "add_to_cart command");

    let product = catalog.get(product_id)?;
    Ok(add_product(cart, product))
}

/// Read, merge, replace. Shared by the command and the product listing action.
pub fn add_product(cart: &CartStore, product: &Product) -> CartResponse {
    cart.replace(shop_core::add_to_cart(&cart.read(), product));
    get_cart(cart)
}
