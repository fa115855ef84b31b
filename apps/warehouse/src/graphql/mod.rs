//! # GraphQL Schema
//!
//! The catalog as a GraphQL query root, built with async-graphql.
//!
//! ```graphql
//! type Query {
//!   products: [Product!]!
//!   product(id: Int): Product
//! }
//!
//! type Product {
//!   id: Int!
//!   name: String!
//!   price: Decimal!
//! }
//! ```
//!
//! There is no mutation or subscription root: the schema is read-only.

use async_graphql::{Context, EmptyMutation, EmptySubscription, Object, Result, Schema};
use rust_decimal::Decimal;
use std::sync::Arc;
use warehouse_core::{CatalogQuery, Product, ProductId};

/// The full GraphQL schema type for the warehouse catalog.
pub type CatalogSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Build the schema, injecting the shared catalog handle as context data.
pub fn build_schema(catalog: Arc<dyn CatalogQuery>) -> CatalogSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(catalog)
        .finish()
}

// =============================================================================
// QUERY ROOT
// =============================================================================

/// GraphQL query root.
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Every catalog entry, in insertion order.
    async fn products(&self, ctx: &Context<'_>) -> Result<Vec<ProductObject>> {
        let catalog = ctx.data::<Arc<dyn CatalogQuery>>()?;
        Ok(catalog.list_all().into_iter().map(ProductObject).collect())
    }

    /// The first entry with the given id, or null.
    ///
    /// An omitted `id` reads as 0.
    async fn product(&self, ctx: &Context<'_>, id: Option<i32>) -> Result<Option<ProductObject>> {
        let catalog = ctx.data::<Arc<dyn CatalogQuery>>()?;
        let id = ProductId(id.unwrap_or_default());
        let product = catalog.get_by_id(id);
        if product.is_none() {
            tracing::debug!("GraphQL product {} not found", id);
        }
        Ok(product.map(ProductObject))
    }
}

// =============================================================================
// PRODUCT TYPE
// =============================================================================

/// GraphQL view of a catalog entry.
pub struct ProductObject(Product);

#[Object(name = "Product")]
impl ProductObject {
    async fn id(&self) -> i32 {
        self.0.id.value()
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn price(&self) -> Decimal {
        self.0.price
    }
}

// =============================================================================
// TESTS
// =============================================================================
