//! # shop-core: Pure Cart Logic
//!
//! This crate is the heart of the shop. It holds the product catalog, the
//! cart merge function and the derived cart total as pure code with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Shop Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/shop (views + commands)                 │   │
//! │  │    ProductList ──► add_to_cart ──► CartStore ──► CartInfo       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ shop-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │  catalog  │  │   │
//! │  │   │  Product  │  │   Money   │  │ add_to_.. │  │  Catalog  │  │   │
//! │  │   │ CartItem  │  │           │  │ cart_total│  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, CartItem, Cart)
//! - [`money`] - Money type with integer arithmetic
//! - [`cart`] - Cart merge and derived totals
//! - [`catalog`] - The fixed product list
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use shop_core::cart::{add_to_cart, cart_total};
//! use shop_core::catalog::Catalog;
//! use shop_core::Cart;
//!
//! let catalog = Catalog::default_products();
//! let shirt = &catalog.products()[0];
//!
//! let cart = add_to_cart(&Cart::new(), shirt);
//! let cart = add_to_cart(&cart, shirt);
//!
//! assert_eq!(cart.items.len(), 1);
//! assert_eq!(cart.items[0].quantity, 2);
//! assert_eq!(cart_total(&cart).amount(), 300_000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{add_to_cart, cart_total, CartTotals};
pub use catalog::Catalog;
pub use error::{CoreError, CoreResult};
pub use money::Money;
pub use types::*;
