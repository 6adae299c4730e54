//! # Product Catalog
//!
//! The fixed, ordered list of products a shopper can add to the cart.
//!
//! A catalog is built once at startup, either from the built-in list or from
//! JSON supplied by the app, and is read-only from then on.
//!
//! ## JSON Shape
//! ```json
//! [
//!   { "id": 1, "price": 150000, "title": "Áo thun nam" },
//!   { "id": 2, "price": 250000, "title": "Áo sơ mi nữ" }
//! ]
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Product, ProductId};

/// Built-in products: (id, price, title).
const DEFAULT_PRODUCTS: &[(u64, i64, &str)] = &[
    (1, 150_000, "Áo thun nam"),
    (2, 250_000, "Áo sơ mi nữ"),
    (3, 300_000, "Áo khoăc thời trang"),
];

/// Immutable, ordered product list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Wraps the given products in listing order. Contents are taken as-is.
    pub fn new(products: Vec<Product>) -> Self {
        Catalog { products }
    }

    /// The built-in three-product catalog.
    pub fn default_products() -> Self {
        Catalog::new(
            DEFAULT_PRODUCTS
                .iter()
                .map(|&(id, price, title)| Product::new(id, Money::from_amount(price), title))
                .collect(),
        )
    }

    /// Parses a JSON array of products.
    ///
    /// Duplicate ids, negative prices and empty titles are accepted unchanged.
    /// Prices must be whole numbers in the smallest currency unit; a
    /// fractional price is a parse error.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        debug!(count = products.len(), "parsed catalog");
        Ok(Catalog::new(products))
    }

    /// All products in listing order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Finds the first product with `id`.
    pub fn get(&self, id: ProductId) -> CoreResult<&Product> {
        self.products
            .iter()
            .find(|product| product.id == id)
            .ok_or(CoreError::ProductNotFound(id))
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_products() {
        let catalog = Catalog::default_products();
        assert_eq!(catalog.len(), 3);

        let titles: Vec<&str> = catalog.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["Áo thun nam", "Áo sơ mi nữ", "Áo khoăc thời trang"]);
        assert_eq!(catalog.products()[1].price.amount(), 250_000);
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::default_products();
        let product = catalog.get(ProductId::new(3)).unwrap();
        assert_eq!(product.price.amount(), 300_000);
    }

    #[test]
    fn test_get_missing_id() {
        let catalog = Catalog::default_products();
        let err = catalog.get(ProductId::new(99)).unwrap_err();
        assert!(matches!(err, CoreError::ProductNotFound(id) if id.get() == 99));
    }

    #[test]
    fn test_from_json_keeps_order_and_duplicates() {
        let catalog = Catalog::from_json(
            r#"[
                {"id": 7, "price": 10, "title": "B"},
                {"id": 5, "price": 20, "title": "A"},
                {"id": 7, "price": 30, "title": "B again"}
            ]"#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.products()[0].id, ProductId::new(7));
        // lookup returns the first match
        assert_eq!(catalog.get(ProductId::new(7)).unwrap().title, "B");
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        let err = Catalog::from_json(r#"[{"id": "one"}]"#).unwrap_err();
        assert!(matches!(err, CoreError::CatalogParse(_)));
    }

    #[test]
    fn test_from_json_rejects_fractional_price() {
        let err = Catalog::from_json(r#"[{"id": 1, "price": 99.5, "title": "Half"}]"#).unwrap_err();
        assert!(matches!(err, CoreError::CatalogParse(_)));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::from_json("[]").unwrap();
        assert!(catalog.is_empty());
    }
}
