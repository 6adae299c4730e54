//! # Cart Store
//!
//! Holds the current cart for the lifetime of the app.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Operations                                │
//! │                                                                         │
//! │  View Action              Store Call             Effect                 │
//! │  ───────────              ──────────             ──────                 │
//! │                                                                         │
//! │  Click "Add to cart" ───► read()       ───────► Arc<Cart> snapshot     │
//! │                           add_to_cart(..)        (pure, shop-core)      │
//! │                           replace(new) ───────► whole cart swapped     │
//! │                                                                         │
//! │  Render cart summary ───► read()       ───────► (read only)            │
//! │                                                                         │
//! │  NOTE: There is no partial update. The cart is replaced as a whole,     │
//! │        so a snapshot handed out by read() never changes under a reader. │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use shop_core::{cart_total, Cart};
use tracing::debug;

#[derive(Debug)]
struct Slot {
    cart: Arc<Cart>,
    updated_at: DateTime<Utc>,
}

/// App-owned cart state.
///
/// Created empty at startup and dropped with the app. Share it by reference
/// or wrap it in an `Arc` if a host needs it on several threads.
#[derive(Debug)]
pub struct CartStore {
    slot: Mutex<Slot>,
}

impl CartStore {
    /// Creates a store holding an empty cart.
    pub fn new() -> Self {
        CartStore {
            slot: Mutex::new(Slot {
                cart: Arc::new(Cart::new()),
                updated_at: Utc::now(),
            }),
        }
    }

    /// Returns the current cart snapshot.
    pub fn read(&self) -> Arc<Cart> {
        Arc::clone(&self.lock().cart)
    }

    /// Replaces the whole cart.
    pub fn replace(&self, cart: Cart) {
        debug!(
            items = cart.item_count(),
            total = %cart_total(&cart),
            "replacing cart"
        );

        let mut slot = self.lock();
        slot.cart = Arc::new(cart);
        slot.updated_at = Utc::now();
    }

    /// The current cart together with when it was created or last replaced,
    /// taken under one lock.
    pub fn snapshot(&self) -> (Arc<Cart>, DateTime<Utc>) {
        let slot = self.lock();
        (Arc::clone(&slot.cart), slot.updated_at)
    }

    // Every write swaps in a fully built value, so a poisoned lock still
    // holds a consistent cart.
    fn lock(&self) -> MutexGuard<'_, Slot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shop_core::{add_to_cart, Money, Product};

    fn shirt() -> Product {
        Product::new(1, Money::from_amount(150_000), "Áo thun nam")
    }

    #[test]
    fn test_starts_empty() {
        let store = CartStore::new();
        assert!(store.read().is_empty());
    }

    #[test]
    fn test_replace_swaps_whole_cart() {
        let store = CartStore::new();
        let next = add_to_cart(&store.read(), &shirt());

        store.replace(next.clone());

        assert_eq!(*store.read(), next);
    }

    #[test]
    fn test_old_snapshot_is_unaffected() {
        let store = CartStore::new();
        let before = store.read();

        store.replace(add_to_cart(&before, &shirt()));

        assert!(before.is_empty());
        assert_eq!(store.read().item_count(), 1);
    }

    #[test]
    fn test_replace_bumps_timestamp() {
        let store = CartStore::new();
        let (_, created) = store.snapshot();

        store.replace(add_to_cart(&store.read(), &shirt()));

        let (cart, replaced) = store.snapshot();
        assert_eq!(cart.item_count(), 1);
        assert!(replaced >= created);
    }
}
