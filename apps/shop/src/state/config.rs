//! # Shop Configuration
//!
//! Display settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`SHOP_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after initialization, so no mutex needed.

use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopConfig {
    /// Label printed after the cart total, e.g. "VND"
    pub currency_label: String,

    /// Number of minor-unit digits in stored amounts (0 for VND)
    pub currency_decimals: u8,

    /// Optional JSON file replacing the built-in catalog
    pub catalog_path: Option<PathBuf>,
}

impl Default for ShopConfig {
    /// Defaults: amounts in whole đồng, labelled "VND", built-in catalog.
    fn default() -> Self {
        ShopConfig {
            currency_label: "VND".to_string(),
            currency_decimals: 0,
            catalog_path: None,
        }
    }
}

impl ShopConfig {
    /// Loads configuration from environment variables with fallback to defaults.
    ///
    /// ## Environment Variables
    /// - `SHOP_CURRENCY_LABEL`: label after the total
    /// - `SHOP_CURRENCY_DECIMALS`: minor-unit digits (0-6)
    /// - `SHOP_CATALOG_PATH`: catalog JSON file
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ShopConfig::from_env`] but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ShopConfig::default();

        if let Some(label) = lookup("SHOP_CURRENCY_LABEL") {
            config.currency_label = label;
        }

        if let Some(decimals) = lookup("SHOP_CURRENCY_DECIMALS") {
            config.currency_decimals = decimals
                .trim()
                .parse::<u8>()
                .ok()
                .filter(|d| *d <= 6)
                .ok_or_else(|| ConfigError::InvalidValue("SHOP_CURRENCY_DECIMALS".to_string()))?;
        }

        config.catalog_path = lookup("SHOP_CATALOG_PATH")
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);

        Ok(config)
    }

    /// Formats an amount in the smallest currency unit, without the label.
    ///
    /// ## Example
    /// ```rust
    /// use shop_lib::state::ShopConfig;
    ///
    /// let config = ShopConfig::default();
    /// assert_eq!(config.format_amount(300000), "300000");
    /// ```
    pub fn format_amount(&self, amount: i64) -> String {
        if self.currency_decimals == 0 {
            return amount.to_string();
        }

        let divisor = 10_i64.pow(u32::from(self.currency_decimals));
        format!(
            "{}{}.{:0width$}",
            if amount < 0 { "-" } else { "" },
            (amount / divisor).abs(),
            (amount % divisor).abs(),
            width = usize::from(self.currency_decimals)
        )
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
