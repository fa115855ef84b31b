//! # Catalog Seeding
//!
//! The service exposes no write endpoint, so the catalog is populated once
//! at startup from a JSON array of products:
//!
//! ```json
//! [
//!   { "id": 1, "name": "Widget", "price": 9.99 },
//!   { "id": 2, "name": "Gadget", "price": "19.99" }
//! ]
//! ```
//!
//! Prices may be JSON numbers or decimal strings.

use std::path::Path;
use warehouse_core::{CatalogError, CatalogStore, Product};

/// Maximum seed file size (16 MB).
pub const MAX_SEED_FILE_SIZE: u64 = 16 * 1024 * 1024;

/// Parse a JSON seed document.
pub fn parse_seed(json: &str) -> Result<Vec<Product>, CatalogError> {
    serde_json::from_str(json)
        .map_err(|e| CatalogError::SerializationError(format!("Invalid seed data: {}", e)))
}

/// Read and parse a seed file, refusing files over `MAX_SEED_FILE_SIZE`.
pub fn load_seed(path: &Path) -> Result<Vec<Product>, CatalogError> {
    let metadata = std::fs::metadata(path).map_err(|e| {
        CatalogError::IoError(format!("Cannot read seed '{}': {}", path.display(), e))
    })?;

    if metadata.len() > MAX_SEED_FILE_SIZE {
        return Err(CatalogError::SerializationError(format!(
            "Seed file size {} bytes exceeds maximum allowed {} bytes",
            metadata.len(),
            MAX_SEED_FILE_SIZE
        )));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        CatalogError::IoError(format!("Cannot read seed '{}': {}", path.display(), e))
    })?;
    parse_seed(&content)
}

/// Build a catalog store from an optional seed file.
///
/// With no seed file the store starts empty.
pub fn build_store(seed: Option<&Path>) -> Result<CatalogStore, CatalogError> {
    let Some(path) = seed else {
        return Ok(CatalogStore::new());
    };

    let products = load_seed(path)?;
    tracing::info!("Seeded catalog with {} products from {}", products.len(), path.display());
    Ok(CatalogStore::with_products(products))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::io::Write;
    use warehouse_core::{CatalogQuery, ProductId};

    #[test]
    fn parse_accepts_numeric_and_string_prices() {
        let products = parse_seed(
            r#"[{"id":1,"name":"Widget","price":9.99},{"id":2,"name":"Gadget","price":"19.99"}]"#,
        )
        .expect("parse");

        assert_eq!(
            products,
            vec![
                Product::new(ProductId(1), "Widget", Decimal::new(999, 2)),
                Product::new(ProductId(2), "Gadget", Decimal::new(1999, 2)),
            ]
        );
    }

    #[test]
    fn parse_rejects_non_array() {
        let err = parse_seed(r#"{"id":1}"#).expect_err("object is not a seed");
        assert!(matches!(err, CatalogError::SerializationError(_)));
    }

    #[test]
    fn build_store_without_seed_is_empty() {
        let store = build_store(None).expect("store");
        assert!(store.is_empty());
    }

    #[test]
    fn build_store_keeps_file_order() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        write!(
            file,
            r#"[{{"id":5,"name":"E","price":1}},{{"id":3,"name":"C","price":2}}]"#
        )
        .expect("write");

        let store = build_store(Some(file.path())).expect("store");
        let ids: Vec<i32> = store.list_all().iter().map(|p| p.id.value()).collect();
        assert_eq!(ids, vec![5, 3]);
    }

    #[test]
    fn load_missing_seed_is_io_error() {
        let err = load_seed(Path::new("/nonexistent/seed.json")).expect_err("missing");
        assert!(matches!(err, CatalogError::IoError(_)));
    }
}
