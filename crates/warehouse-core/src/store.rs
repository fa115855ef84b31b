//! # Catalog Store
//!
//! The in-memory, process-lifetime holder of all catalog entries.
//!
//! This module defines:
//! - `CatalogQuery`: the read-only capability both query surfaces use
//! - `CatalogStore`: the lock-guarded sequence implementing it
//!
//! ## Ordering
//!
//! The store is an append-only sequence. Insertion order is preserved and
//! lookups by id return the FIRST match, so duplicate ids resolve to the
//! entry appended earliest.

use crate::{Product, ProductId};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

// =============================================================================
// CATALOGQUERY TRAIT
// =============================================================================

/// Read-only view of the catalog.
///
/// Every query surface (REST, GraphQL) is handed an implementation of this
/// trait instead of the store itself, so no surface can append entries and
/// all surfaces answer from the same data.
pub trait CatalogQuery: Send + Sync {
    /// Snapshot of every entry in insertion order.
    fn list_all(&self) -> Vec<Product>;

    /// First entry whose id equals `id`, or `None` if there is none.
    fn get_by_id(&self, id: ProductId) -> Option<Product>;
}

// =============================================================================
// CATALOG STORE
// =============================================================================

/// The catalog store.
///
/// All operations take `&self`; a single `RwLock` serializes appends
/// against reads so no caller ever sees a partially-updated sequence.
#[derive(Debug, Default)]
pub struct CatalogStore {
    products: RwLock<Vec<Product>>,
}

impl CatalogStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `products`, appended in order.
    #[must_use]
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        Self {
            products: RwLock::new(products.into_iter().collect()),
        }
    }

    /// Append an entry. No uniqueness or field checks are performed.
    pub fn add(&self, product: Product) {
        self.write().push(product);
    }

    /// Number of entries currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether the store holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // A panic while holding the lock cannot leave the Vec half-pushed,
    // so a poisoned lock is still safe to use.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Product>> {
        self.products.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Product>> {
        self.products.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CatalogQuery for CatalogStore {
    fn list_all(&self) -> Vec<Product> {
        self.read().clone()
    }

    fn get_by_id(&self, id: ProductId) -> Option<Product> {
        self.read().iter().find(|p| p.id == id).cloned()
    }
}

// =============================================================================
// TESTS
// =============================================================================
