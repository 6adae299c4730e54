//! # Views Module
//!
//! Renderers over the current state. Views own no state: each `view()` call
//! reads the store and catalog and builds a fresh view model.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ShopPage                                                               │
//! │  ┌───────────────────────────────┐  ┌───────────────────────────────┐   │
//! │  │ ProductList                   │  │ CartInfo                      │   │
//! │  │  title - price [Add to cart]  │  │  title: quantity              │   │
//! │  │        │                      │  │  TOTAL: <total> <label>       │   │
//! │  └────────┼──────────────────────┘  └───────────────▲───────────────┘   │
//! │           └──► add_to_cart ──► CartStore::replace ──┘                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart_info;
mod product_list;

use std::fmt;

use serde::Serialize;

pub use cart_info::{CartInfo, CartInfoView, CartLineView};
pub use product_list::{ProductList, ProductListView, ProductRowView};

use crate::state::AppState;

/// Both surfaces of one render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopPageView {
    pub product_list: ProductListView,
    pub cart_info: CartInfoView,
}

impl fmt::Display for ShopPageView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.product_list, self.cart_info)
    }
}

/// The listing followed by the cart summary.
#[derive(Debug, Clone, Copy)]
pub struct ShopPage<'a> {
    state: &'a AppState,
}

impl<'a> ShopPage<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    pub fn product_list(&self) -> ProductList<'a> {
        ProductList::new(&self.state.catalog, &self.state.cart, &self.state.config)
    }

    pub fn cart_info(&self) -> CartInfo<'a> {
        CartInfo::new(&self.state.cart, &self.state.config)
    }

    pub fn view(&self) -> ShopPageView {
        ShopPageView {
            product_list: self.product_list().view(),
            cart_info: self.cart_info().view(),
        }
    }
}
