//! Cart merge properties and end-to-end cart scenarios.

use proptest::prelude::*;
use shop_core::{add_to_cart, cart_total, Cart, CartItem, Catalog, Money, Product, ProductId};

fn arb_product() -> impl Strategy<Value = Product> {
    (0u64..20, 0i64..1_000_000, "[A-Za-z ]{1,16}")
        .prop_map(|(id, price, title)| Product::new(id, Money::from_amount(price), title))
}

/// Builds a cart by adding each product in order, which keeps ids unique.
fn arb_cart() -> impl Strategy<Value = Cart> {
    prop::collection::vec(arb_product(), 0..12)
        .prop_map(|products| products.iter().fold(Cart::new(), |cart, p| add_to_cart(&cart, p)))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 500,
        ..ProptestConfig::default()
    })]

    /// Property: a product not in the cart is appended with quantity 1.
    #[test]
    fn new_product_is_appended(cart in arb_cart(), product in arb_product()) {
        prop_assume!(cart.get(product.id).is_none());

        let next = add_to_cart(&cart, &product);

        prop_assert_eq!(next.items.len(), cart.items.len() + 1);
        let last = next.items.last().unwrap();
        prop_assert_eq!(last.quantity, 1);
        prop_assert_eq!(&last.product, &product);
        prop_assert_eq!(last.id, product.id);
        prop_assert_eq!(&next.items[..cart.items.len()], &cart.items[..]);
    }

    /// Property: a product already in the cart bumps only its own line.
    #[test]
    fn existing_product_is_incremented(cart in arb_cart(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!cart.is_empty());
        let index = pick.index(cart.items.len());
        let product = cart.items[index].product.clone();

        let next = add_to_cart(&cart, &product);

        prop_assert_eq!(next.items.len(), cart.items.len());
        for (i, (before, after)) in cart.items.iter().zip(&next.items).enumerate() {
            if i == index {
                prop_assert_eq!(after.quantity, before.quantity + 1);
                prop_assert_eq!(&after.product, &before.product);
            } else {
                prop_assert_eq!(after, before);
            }
        }
    }

    /// Property: the input cart is never modified.
    #[test]
    fn input_is_not_mutated(cart in arb_cart(), product in arb_product()) {
        let snapshot = cart.clone();
        let _ = add_to_cart(&cart, &product);
        prop_assert_eq!(cart, snapshot);
    }

    /// Property: ids stay unique no matter how many adds happen.
    #[test]
    fn ids_stay_unique(products in prop::collection::vec(arb_product(), 0..40)) {
        let cart = products.iter().fold(Cart::new(), |cart, p| add_to_cart(&cart, p));

        let mut ids: Vec<ProductId> = cart.items.iter().map(|item| item.id).collect();
        ids.sort();
        ids.dedup();
        prop_assert_eq!(ids.len(), cart.items.len());
        prop_assert_eq!(cart.total_quantity(), products.len() as u64);
    }

    /// Property: adding a product raises the total by exactly its price.
    #[test]
    fn total_grows_by_price(cart in arb_cart(), product in arb_product()) {
        let price = cart.get(product.id).map_or(product.price, |item| item.product.price);
        let next = add_to_cart(&cart, &product);
        prop_assert_eq!(cart_total(&next), cart_total(&cart) + price);
    }
}

#[test]
fn empty_cart_totals_zero() {
    assert_eq!(cart_total(&Cart::new()).amount(), 0);
}

#[test]
fn single_line_total() {
    let product = Product::new(1, Money::from_amount(150_000), "Áo thun nam");
    let mut item = CartItem::new(&product);
    item.quantity = 2;

    assert_eq!(cart_total(&Cart::from(vec![item])).amount(), 300_000);
}

#[test]
fn adding_same_shirt_twice() {
    let catalog = Catalog::default_products();
    let shirt = catalog.get(ProductId::new(1)).unwrap();

    let cart = add_to_cart(&add_to_cart(&Cart::new(), shirt), shirt);

    let expected = Cart::from(vec![CartItem {
        id: ProductId::new(1),
        product: Product::new(1, Money::from_amount(150_000), "Áo thun nam"),
        quantity: 2,
    }]);
    assert_eq!(cart, expected);
    assert_eq!(cart_total(&cart).amount(), 300_000);
}

#[test]
fn adding_two_products_keeps_insertion_order() {
    let catalog = Catalog::default_products();
    let first = catalog.get(ProductId::new(1)).unwrap();
    let second = catalog.get(ProductId::new(2)).unwrap();

    let cart = add_to_cart(&add_to_cart(&Cart::new(), first), second);

    let ids: Vec<u64> = cart.items.iter().map(|item| item.id.get()).collect();
    assert_eq!(ids, [1, 2]);
    assert!(cart.items.iter().all(|item| item.quantity == 1));
    assert_eq!(cart_total(&cart), first.price + second.price);
}

#[test]
fn huge_catalog_price_saturates_total() {
    let catalog =
        Catalog::from_json(r#"[{"id": 1, "price": 5000000000000000000, "title": "Gold"}]"#).unwrap();
    let gold = catalog.get(ProductId::new(1)).unwrap();

    let cart = add_to_cart(&add_to_cart(&Cart::new(), gold), gold);

    assert_eq!(cart.items[0].quantity, 2);
    assert_eq!(cart_total(&cart).amount(), i64::MAX);
}
