//! # State Module
//!
//! Application state for the shop.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything, each concern
//! gets its own type and commands declare exactly what they need.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │ CatalogState │  │  CartStore   │  │   ShopConfig     │              │
//! │  │              │  │              │  │                  │              │
//! │  │  Catalog     │  │  Mutex<      │  │  currency_label  │              │
//! │  │  (fixed)     │  │   Arc<Cart>> │  │  decimals        │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! │                                                                         │
//! │  • CatalogState: read-only after startup                                │
//! │  • CartStore: whole-value replace under a lock                          │
//! │  • ShopConfig: read-only after startup                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod catalog;
mod config;

pub use cart::CartStore;
pub use catalog::CatalogState;
pub use config::{ConfigError, ShopConfig};

/// Everything the views and commands need, created together at startup.
#[derive(Debug, Default)]
pub struct AppState {
    pub catalog: CatalogState,
    pub cart: CartStore,
    pub config: ShopConfig,
}

impl AppState {
    /// Builds state from a config: loads the catalog and starts an empty cart.
    pub fn init(config: ShopConfig) -> Result<Self, crate::error::ApiError> {
        Ok(AppState {
            catalog: CatalogState::load(&config)?,
            cart: CartStore::new(),
            config,
        })
    }
}
