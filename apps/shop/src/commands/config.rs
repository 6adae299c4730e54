//! # Config Commands
//!
//! Commands for retrieving application configuration.

use tracing::debug;

use crate::state::ShopConfig;

/// Gets the current application configuration.
///
/// ## When Used
/// - `shop --config` (prints it as JSON)
/// - Host startup (currency label for the cart summary)
pub fn get_config(config: &ShopConfig) -> ShopConfig {
    debug!("get_config command");
    config.clone()
}
