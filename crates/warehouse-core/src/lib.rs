//! # warehouse-core
//!
//! The product catalog behind the warehouse service - THE CATALOG.
//!
//! This crate owns the catalog entries for one process lifetime and exposes
//! them through a read-only query capability shared by every query surface.
//!
//! ## Architectural Constraints
//!
//! - Holds the ONLY copy of the catalog; surfaces never keep their own
//! - Entries are only ever appended; there is no update or delete
//! - Has NO async, NO network dependencies (pure Rust)

// =============================================================================
// MODULES
// =============================================================================

pub mod store;
pub mod types;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use rust_decimal::Decimal;
pub use store::{CatalogQuery, CatalogStore};
pub use types::{CatalogError, Product, ProductId};
