//! # Commands Module
//!
//! All operations a host can invoke on the shop.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── product.rs  ◄─── Catalog listing
//! ├── cart.rs     ◄─── Cart read and add
//! └── config.rs   ◄─── Configuration retrieval
//! ```
//!
//! ## State Injection
//! Each command takes only the state it needs:
//! ```rust,ignore
//! // Only needs catalog
//! fn list_products(catalog: &CatalogState)
//!
//! // Only needs cart
//! fn get_cart(cart: &CartStore)
//!
//! // Needs both
//! fn add_to_cart(catalog: &CatalogState, cart: &CartStore, product_id: ProductId)
//! ```

pub mod cart;
pub mod config;
pub mod product;
