//! # Product Commands
//!
//! Read-only access to the catalog.

use shop_core::Product;
use tracing::debug;

use crate::state::CatalogState;

/// Lists every product in catalog order.
pub fn list_products(catalog: &CatalogState) -> Vec<Product> {
    debug!(count = catalog.len(), "list_products command");
    catalog.products().to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_products_in_order() {
        let products = list_products(&CatalogState::default());
        let ids: Vec<u64> = products.iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, [1, 2, 3]);
    }
}
