//! # Core Type Definitions
//!
//! This module contains the catalog record and its supporting types:
//! - Product identifier (`ProductId`)
//! - The catalog entry itself (`Product`)
//! - Error types (`CatalogError`)
//!
//! ## Numeric Guarantees
//!
//! Prices are fixed-point decimals (`rust_decimal::Decimal`). Nothing in the
//! catalog performs floating-point arithmetic.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// PRODUCT IDENTIFIER
// =============================================================================

/// Identifier of a catalog entry.
///
/// Intended to be unique, but the catalog does not enforce it.
/// 32 bits wide so every id fits the GraphQL `Int` scalar.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct ProductId(pub i32);

impl ProductId {
    /// Get the raw identifier value.
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = CatalogError;

    /// Parse an identifier from untrusted text (e.g. a URL path segment).
    ///
    /// Surrounding whitespace is not accepted; the text must be a plain
    /// base-10 integer within `i32` range.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i32>()
            .map(Self)
            .map_err(|_| CatalogError::InvalidId(s.to_string()))
    }
}

// =============================================================================
// PRODUCT
// =============================================================================

/// A single catalog entry: `{ id, name, price }`.
///
/// A flat record with no relationships. Neither the name nor the price is
/// validated: empty names and negative prices are stored as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Decimal,
}

impl Product {
    /// Create a new catalog entry.
    #[must_use]
    pub fn new(id: ProductId, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur around the catalog.
///
/// The store itself never fails: absence of an entry is `None`, not an
/// error. These variants cover the boundaries that feed the store.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A product identifier could not be parsed as an integer.
    #[error("Invalid product id: {0:?}")]
    InvalidId(String),

    /// A serialization or deserialization error occurred.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(String),
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_id_parses_integers() {
        assert_eq!("42".parse::<ProductId>().ok(), Some(ProductId(42)));
        assert_eq!("-7".parse::<ProductId>().ok(), Some(ProductId(-7)));
    }

    #[test]
    fn product_id_rejects_non_integers() {
        for raw in ["abc", "1.5", "", " 1", "99999999999"] {
            let err = raw.parse::<ProductId>();
            assert!(
                matches!(err, Err(CatalogError::InvalidId(ref s)) if s == raw),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn product_id_serializes_as_bare_integer() {
        let json = serde_json::to_string(&ProductId(3)).ok();
        assert_eq!(json.as_deref(), Some("3"));
    }

    #[test]
    fn product_keeps_unvalidated_fields() {
        let product = Product::new(ProductId(1), "", Decimal::new(-100, 2));
        assert!(product.name.is_empty());
        assert!(product.price.is_sign_negative());
    }

    #[test]
    fn product_deserializes_exact_price() {
        let product: Product =
            serde_json::from_str(r#"{"id":1,"name":"Widget","price":"9.99"}"#).expect("parse");
        assert_eq!(product.id, ProductId(1));
        assert_eq!(product.price, Decimal::new(999, 2));
    }
}
