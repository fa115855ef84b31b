//! Unit tests for API types serialization/deserialization.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use rust_decimal::Decimal;
use serde_json::{Value, json};
use warehouse::api::{ErrorResponse, HealthResponse, ProductJson};
use warehouse_core::{Product, ProductId};

// =============================================================================
// HEALTH RESPONSE TESTS
// =============================================================================

#[test]
fn test_health_response_default() {
    let health = HealthResponse::default();
    assert_eq!(health.status, "ok");
    assert!(!health.version.is_empty());
}

#[test]
fn test_health_response_deserialization() {
    let json = r#"{"status":"healthy","version":"1.0.0"}"#;
    let health: HealthResponse = serde_json::from_str(json).unwrap();

    assert_eq!(health.status, "healthy");
    assert_eq!(health.version, "1.0.0");
}

// =============================================================================
// PRODUCT JSON TESTS
// =============================================================================

#[test]
fn test_product_json_from_product() {
    let product = Product::new(ProductId(4), "Sprocket", Decimal::new(1250, 2));
    let json = ProductJson::from(product);

    assert_eq!(json.id, ProductId(4));
    assert_eq!(json.name, "Sprocket");
    assert_eq!(json.price, Decimal::new(1250, 2));
}

#[test]
fn test_product_json_has_exactly_three_fields() {
    let json = ProductJson::from(Product::new(ProductId(1), "Widget", Decimal::new(999, 2)));
    let value = serde_json::to_value(&json).unwrap();

    assert_eq!(value, json!({ "id": 1, "name": "Widget", "price": "9.99" }));
    assert_eq!(value.as_object().unwrap().len(), 3);
}

#[test]
fn test_product_json_price_keeps_every_digit() {
    let json = ProductJson::from(Product::new(
        ProductId(1),
        "Precise",
        Decimal::new(1_234_567_890_123_456_789, 9),
    ));
    let value = serde_json::to_value(&json).unwrap();

    assert_eq!(value["price"], "1234567890.123456789");
    assert!(matches!(value["id"], Value::Number(_)));
}

#[test]
fn test_product_json_round_trips_exact_price() {
    let parsed: ProductJson =
        serde_json::from_str(r#"{"id":9,"name":"Bolt","price":"0.10"}"#).unwrap();

    assert_eq!(parsed.id, ProductId(9));
    assert_eq!(parsed.price, Decimal::new(10, 2));
}

#[test]
fn test_product_json_negative_price_passes_through() {
    let json = ProductJson::from(Product::new(ProductId(1), "Refund", Decimal::new(-500, 2)));
    let value = serde_json::to_value(&json).unwrap();

    assert_eq!(value["price"], "-5.00");
}

// =============================================================================
// ERROR RESPONSE TESTS
// =============================================================================

#[test]
fn test_error_response_serialization() {
    let error = ErrorResponse::new("Invalid product id: \"x\"");
    let json = serde_json::to_string(&error).unwrap();

    assert_eq!(json, r#"{"error":"Invalid product id: \"x\""}"#);
}
