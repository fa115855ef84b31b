//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use warehouse::{
    api::{self, ProductJson},
    config::ServerConfig,
    graphql::build_schema,
    seed::build_store,
};
use warehouse_core::{CatalogError, CatalogQuery, CatalogStore, Product, ProductId};

// =============================================================================
// SERVER COMMAND
// =============================================================================

/// Start the HTTP server.
///
/// Values come from the config file (if any), then command-line overrides.
pub async fn cmd_server(
    config_path: Option<PathBuf>,
    host: Option<String>,
    port: Option<u16>,
    seed: Option<PathBuf>,
    cors_origins: Vec<String>,
) -> Result<(), CatalogError> {
    let mut config = match config_path {
        Some(path) => ServerConfig::load(&path)?,
        None => ServerConfig::default(),
    };
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }
    if seed.is_some() {
        config.seed = seed;
    }
    if !cors_origins.is_empty() {
        config.cors_origins = cors_origins;
    }

    let store = build_store(config.seed.as_deref())?;

    println!("Warehouse Catalog Service Starting...");
    println!();
    println!("Configuration:");
    println!("  Host:     {}", config.host);
    println!("  Port:     {}", config.port);
    match &config.seed {
        Some(path) => println!("  Seed:     {:?} ({} products)", path, store.len()),
        None => println!("  Seed:     none (empty catalog)"),
    }
    println!();
    println!("Endpoints:");
    println!("  GET  /products      - List products");
    println!("  GET  /products/{{id}} - Get a product");
    println!("  POST /graphql       - GraphQL query");
    println!("  GET  /graphql       - GraphiQL explorer");
    println!("  GET  /health        - Health check");
    println!();
    println!("Press Ctrl+C to stop");
    println!();

    api::run_server(&config, Arc::new(store)).await
}

// =============================================================================
// PRODUCTS COMMAND
// =============================================================================

/// List every product in a seed file.
pub fn cmd_products(seed: &Path, json_mode: bool) -> Result<(), CatalogError> {
    let store = build_store(Some(seed))?;
    let products = store.list_all();

    if json_mode {
        return print_json(&products.into_iter().map(ProductJson::from).collect::<Vec<_>>());
    }

    println!("Warehouse Catalog");
    println!("=================");
    println!("Seed: {:?}", seed);
    println!();
    if products.is_empty() {
        println!("(no products)");
    }
    for product in &products {
        print_product(product);
    }

    Ok(())
}

// =============================================================================
// PRODUCT COMMAND
// =============================================================================

/// Show one product from a seed file.
pub fn cmd_product(seed: &Path, id: i32, json_mode: bool) -> Result<(), CatalogError> {
    let store = build_store(Some(seed))?;
    show_product(&store, ProductId(id), json_mode)
}

fn show_product(store: &CatalogStore, id: ProductId, json_mode: bool) -> Result<(), CatalogError> {
    let product = store.get_by_id(id);

    if json_mode {
        return print_json(&product.map(ProductJson::from));
    }

    match product {
        Some(product) => print_product(&product),
        None => println!("Product {} not found", id),
    }
    Ok(())
}

// =============================================================================
// SCHEMA COMMAND
// =============================================================================

/// Print the GraphQL SDL.
pub fn cmd_schema() -> Result<(), CatalogError> {
    let schema = build_schema(Arc::new(CatalogStore::new()));
    println!("{}", schema.sdl());
    Ok(())
}

// =============================================================================
// OUTPUT HELPERS
// =============================================================================

fn print_product(product: &Product) {
    println!("{:>6}  {:<32} {}", product.id, product.name, product.price);
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), CatalogError> {
    let output = serde_json::to_string_pretty(value)
        .map_err(|e| CatalogError::SerializationError(e.to_string()))?;
    println!("{}", output);
    Ok(())
}
