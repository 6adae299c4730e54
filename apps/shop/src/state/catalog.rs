//! # Catalog State
//!
//! Wrapper around the product catalog fixed at startup.

use std::fs;
use std::ops::Deref;

use shop_core::Catalog;
use tracing::info;

use crate::error::ApiError;
use crate::state::ShopConfig;

/// Read-only catalog, built once when the app starts.
#[derive(Debug, Clone)]
pub struct CatalogState {
    catalog: Catalog,
}

impl CatalogState {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Loads the catalog named by the config, or the built-in products.
    pub fn load(config: &ShopConfig) -> Result<Self, ApiError> {
        let catalog = match &config.catalog_path {
            Some(path) => {
                let json = fs::read_to_string(path).map_err(|e| {
                    ApiError::internal(format!("Failed to read catalog {}: {}", path.display(), e))
                })?;
                Catalog::from_json(&json)?
            }
            None => Catalog::default_products(),
        };

        info!(products = catalog.len(), "Catalog loaded");
        Ok(Self::new(catalog))
    }
}

impl Deref for CatalogState {
    type Target = Catalog;

    fn deref(&self) -> &Self::Target {
        &self.catalog
    }
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new(Catalog::default_products())
    }
}
