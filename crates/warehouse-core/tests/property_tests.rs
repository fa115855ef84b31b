//! # Property-Based Tests
//!
//! Ordering and lookup invariants of the catalog store, checked with proptest.

use proptest::collection::vec;
use proptest::prelude::*;
use warehouse_core::{CatalogQuery, CatalogStore, Decimal, Product, ProductId};

/// Strategy for catalog entries with a deliberately small id space so
/// duplicate ids show up often.
fn product_strategy() -> impl Strategy<Value = Product> {
    (0i32..20, "[a-zA-Z ]{0,12}", -100_000i64..100_000).prop_map(|(id, name, cents)| {
        Product::new(ProductId(id), name, Decimal::new(cents, 2))
    })
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    /// `list_all` returns exactly the appended entries, in append order.
    #[test]
    fn list_all_preserves_append_order(products in vec(product_strategy(), 0..50)) {
        let store = CatalogStore::new();
        for product in &products {
            store.add(product.clone());
        }

        prop_assert_eq!(store.list_all(), products);
    }

    /// `get_by_id` returns the first appended entry with the id, or nothing.
    #[test]
    fn get_by_id_returns_first_match(
        products in vec(product_strategy(), 0..50),
        lookup_id in 0i32..25
    ) {
        let store = CatalogStore::with_products(products.clone());
        let expected = products.iter().find(|p| p.id == ProductId(lookup_id)).cloned();

        prop_assert_eq!(store.get_by_id(ProductId(lookup_id)), expected);
    }

    /// Two `list_all` calls with no append in between are equal.
    #[test]
    fn list_all_is_idempotent(products in vec(product_strategy(), 0..50)) {
        let store = CatalogStore::with_products(products);

        let first = store.list_all();
        let second = store.list_all();
        prop_assert_eq!(first, second);
    }

    /// Every append grows the store by exactly one entry.
    #[test]
    fn add_grows_by_one(products in vec(product_strategy(), 1..50)) {
        let store = CatalogStore::new();
        for (i, product) in products.into_iter().enumerate() {
            store.add(product);
            prop_assert_eq!(store.len(), i + 1);
        }
    }
}
