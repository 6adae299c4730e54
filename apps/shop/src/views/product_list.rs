//! # Product Listing
//!
//! Lists the catalog with an "Add to cart" action per row.
//!
//! ```text
//! Product List
//! - Áo thun nam - 150000 [Add to cart]
//! - Áo sơ mi nữ - 250000 [Add to cart]
//! ```

use std::fmt;

use serde::Serialize;
use shop_core::{Product, ProductId};

use crate::commands::cart::{self, CartResponse};
use crate::error::ApiError;
use crate::state::{CartStore, CatalogState, ShopConfig};

const ADD_TO_CART_LABEL: &str = "Add to cart";

/// One listing row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRowView {
    pub id: ProductId,
    pub title: String,
    pub price: String,
    pub action_label: &'static str,
}

/// Listing display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductListView {
    pub rows: Vec<ProductRowView>,
}

impl fmt::Display for ProductListView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Product List")?;
        for row in &self.rows {
            writeln!(f, "- {} - {} [{}]", row.title, row.price, row.action_label)?;
        }
        Ok(())
    }
}

/// Product listing bound to the app state.
#[derive(Debug, Clone, Copy)]
pub struct ProductList<'a> {
    catalog: &'a CatalogState,
    cart: &'a CartStore,
    config: &'a ShopConfig,
}

impl<'a> ProductList<'a> {
    pub fn new(catalog: &'a CatalogState, cart: &'a CartStore, config: &'a ShopConfig) -> Self {
        Self {
            catalog,
            cart,
            config,
        }
    }

    /// Builds the rows from the catalog.
    pub fn view(&self) -> ProductListView {
        ProductListView {
            rows: self
                .catalog
                .iter()
                .map(|product| ProductRowView {
                    id: product.id,
                    title: product.title.clone(),
                    price: self.config.format_amount(product.price.amount()),
                    action_label: ADD_TO_CART_LABEL,
                })
                .collect(),
        }
    }

    /// The row action: merge `product` into the current cart and store it.
    pub fn on_add_to_cart(&self, product: &Product) -> CartResponse {
        cart::add_product(self.cart, product)
    }

    /// Triggers the action of the row with `id`.
    pub fn click(&self, id: ProductId) -> Result<CartResponse, ApiError> {
        cart::add_to_cart(self.catalog, self.cart, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_follow_catalog() {
        let (catalog, cart, config) = (CatalogState::default(), CartStore::new(), ShopConfig::default());
        let view = ProductList::new(&catalog, &cart, &config).view();

        assert_eq!(view.rows.len(), 3);
        assert_eq!(view.rows[0].title, "Áo thun nam");
        assert_eq!(view.rows[0].price, "150000");
        assert_eq!(view.rows[2].id, ProductId::new(3));
    }

    #[test]
    fn test_render() {
        let (catalog, cart, config) = (CatalogState::default(), CartStore::new(), ShopConfig::default());
        let text = ProductList::new(&catalog, &cart, &config).view().to_string();

        assert!(text.starts_with("Product List\n"));
        assert!(text.contains("- Áo sơ mi nữ - 250000 [Add to cart]\n"));
    }

    #[test]
    fn test_action_updates_store() {
        let (catalog, cart, config) = (CatalogState::default(), CartStore::new(), ShopConfig::default());
        let list = ProductList::new(&catalog, &cart, &config);

        let product = catalog.products()[0].clone();
        list.on_add_to_cart(&product);
        list.on_add_to_cart(&product);

        assert_eq!(cart.read().items[0].quantity, 2);
    }

    #[test]
    fn test_click_unknown_row() {
        let (catalog, cart, config) = (CatalogState::default(), CartStore::new(), ShopConfig::default());
        let list = ProductList::new(&catalog, &cart, &config);

        assert!(list.click(ProductId::new(77)).is_err());
        assert!(cart.read().is_empty());
    }
}
