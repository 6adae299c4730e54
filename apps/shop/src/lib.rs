//! # Shop Library
//!
//! Application layer for the mini shop: state, commands and views, plus the
//! startup sequence used by the `shop` binary.
//!
//! ## Module Organization
//! ```text
//! shop_lib/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── AppState and exports
//! │   ├── cart.rs     ◄─── CartStore (read / replace)
//! │   ├── catalog.rs  ◄─── CatalogState
//! │   └── config.rs   ◄─── ShopConfig
//! ├── commands/
//! │   ├── cart.rs     ◄─── get_cart, add_to_cart
//! │   ├── product.rs  ◄─── list_products
//! │   └── config.rs   ◄─── get_config
//! ├── views/
//! │   ├── mod.rs      ◄─── ShopPage
//! │   ├── product_list.rs
//! │   └── cart_info.rs
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod state;
pub mod views;

use shop_core::ProductId;
use tracing::info;
use tracing_subscriber::EnvFilter;

use error::ApiError;
use state::{AppState, ShopConfig};
use views::ShopPage;

/// What the host should print after running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// The rendered page
    #[default]
    Text,
    /// The cart response as JSON
    Json,
    /// The loaded configuration as JSON
    Config,
}

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn,shop_lib=info";

/// Runs one session: builds state, clicks "Add to cart" for each id in
/// order, then renders.
///
/// ## Startup Sequence
/// ```text
/// 1. Load configuration (SHOP_* env vars)
/// 2. Load catalog (SHOP_CATALOG_PATH or built-in)
/// 3. Start an empty cart store
/// 4. Apply each add action, read → merge → replace
/// 5. Render the page, the cart JSON or the config JSON
/// ```
pub fn run(product_ids: &[ProductId], format: OutputFormat) -> Result<String, ApiError> {
    let config = ShopConfig::from_env()?;
    info!(currency = %config.currency_label, "Configuration loaded");

    let state = AppState::init(config)?;
    run_with_state(&state, product_ids, format)
}

/// [`run`] against already-built state.
pub fn run_with_state(
    state: &AppState,
    product_ids: &[ProductId],
    format: OutputFormat,
) -> Result<String, ApiError> {
    let page = ShopPage::new(state);

    for &id in product_ids {
        page.product_list().click(id)?;
    }

    match format {
        OutputFormat::Text => Ok(page.view().to_string()),
        OutputFormat::Json => {
            let response = commands::cart::get_cart(&state.cart);
            serde_json::to_string_pretty(&response)
                .map_err(|e| ApiError::internal(format!("Failed to encode cart: {}", e)))
        }
        OutputFormat::Config => {
            let config = commands::config::get_config(&state.config);
            serde_json::to_string_pretty(&config)
                .map_err(|e| ApiError::internal(format!("Failed to encode config: {}", e)))
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=shop_core=trace` - Show every cart merge
/// - Default: [`DEFAULT_LOG_FILTER`]
///
/// Logs go to stderr so the rendered page on stdout stays clean.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
