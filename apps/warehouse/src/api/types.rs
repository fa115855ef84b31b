//! # API Request/Response Types
//!
//! This module defines the JSON structures for the REST API.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use warehouse_core::{Product, ProductId};

// =============================================================================
// HEALTH RESPONSE
// =============================================================================

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

// =============================================================================
// PRODUCT JSON
// =============================================================================

/// Product JSON representation: `{ "id": 1, "name": "Widget", "price": "9.99" }`.
///
/// The price travels as a decimal string, digit for digit what the catalog
/// holds and what the GraphQL `Decimal` scalar returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductJson {
    pub id: ProductId,
    pub name: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
}

impl From<Product> for ProductJson {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
        }
    }
}

// =============================================================================
// ERROR RESPONSE
// =============================================================================

/// Client error body, used for 400 responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { error: msg.into() }
    }
}
