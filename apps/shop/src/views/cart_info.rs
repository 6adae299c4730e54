//! # Cart Summary
//!
//! Shows each cart line with its quantity and the derived total.
//!
//! ```text
//! Cart info:
//! - Áo thun nam: 2
//! TOTAL: 300000 VND
//! ```

use std::fmt;

use serde::Serialize;
use shop_core::{cart_total, Cart, ProductId};

use crate::state::{CartStore, ShopConfig};

/// One cart line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLineView {
    pub id: ProductId,
    pub title: String,
    pub quantity: u32,
}

/// Cart summary display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartInfoView {
    pub lines: Vec<CartLineView>,
    pub total: String,
    pub currency_label: String,
}

impl CartInfoView {
    /// Builds the summary from a cart snapshot. The total is recomputed here
    /// on every call.
    pub fn from_cart(cart: &Cart, config: &ShopConfig) -> Self {
        CartInfoView {
            lines: cart
                .items
                .iter()
                .map(|item| CartLineView {
                    id: item.id,
                    title: item.product.title.clone(),
                    quantity: item.quantity,
                })
                .collect(),
            total: config.format_amount(cart_total(cart).amount()),
            currency_label: config.currency_label.clone(),
        }
    }
}

impl fmt::Display for CartInfoView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Cart info:")?;
        for line in &self.lines {
            writeln!(f, "- {}: {}", line.title, line.quantity)?;
        }
        writeln!(f, "TOTAL: {} {}", self.total, self.currency_label)
    }
}

/// Cart summary bound to the app state.
#[derive(Debug, Clone, Copy)]
pub struct CartInfo<'a> {
    cart: &'a CartStore,
    config: &'a ShopConfig,
}

impl<'a> CartInfo<'a> {
    pub fn new(cart: &'a CartStore, config: &'a ShopConfig) -> Self {
        Self { cart, config }
    }

    pub fn view(&self) -> CartInfoView {
        CartInfoView::from_cart(&self.cart.read(), self.config)
    }
}
