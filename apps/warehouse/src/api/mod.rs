//! # Warehouse HTTP API Module
//!
//! This module implements the HTTP server using axum. It carries both query
//! surfaces over the catalog.
//!
//! ## Endpoints
//!
//! - `GET /products` - List all products
//! - `GET /products/{id}` - Get one product (404 if absent, 400 if id is not an integer)
//! - `GET /api/products`, `GET /api/products/{id}` - Same, under the path the gateway calls
//! - `POST /graphql` - Execute a GraphQL query
//! - `GET /graphql` - GraphiQL explorer
//! - `GET /health` - Health check
//!
//! ## CORS
//!
//! Allowed origins come from `ServerConfig::cors_origins`: empty means
//! localhost only, `"*"` allows any origin.

mod handlers;
mod types;

// Re-export handlers and types for integration tests (via `warehouse::api::*`)
pub use handlers::{
    get_product_handler, graphiql_handler, graphql_handler, health_handler, list_products_handler,
};
pub use types::{ErrorResponse, HealthResponse, ProductJson};

use crate::config::ServerConfig;
use crate::graphql::{CatalogSchema, build_schema};
use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::get,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use warehouse_core::{CatalogError, CatalogQuery};

// =============================================================================
// SERVER STATE
// =============================================================================

/// Shared server state.
///
/// Both surfaces reach the catalog through the same read-only handle; the
/// GraphQL schema carries a clone of it as context data.
#[derive(Clone)]
pub struct AppState {
    /// Read-only catalog handle used by the REST handlers.
    pub catalog: Arc<dyn CatalogQuery>,
    /// GraphQL schema over the same catalog.
    pub schema: CatalogSchema,
}

impl AppState {
    /// Create app state over a catalog.
    #[must_use]
    pub fn new(catalog: Arc<dyn CatalogQuery>) -> Self {
        let schema = build_schema(Arc::clone(&catalog));
        Self { catalog, schema }
    }
}

// =============================================================================
// CORS CONFIGURATION
// =============================================================================

/// Origins allowed when none are configured.
const LOCALHOST_ORIGINS: [&str; 4] = [
    "http://localhost:3000",
    "http://localhost:8080",
    "http://127.0.0.1:3000",
    "http://127.0.0.1:8080",
];

/// Build the CORS layer from the configured origins.
///
/// - Any entry equal to `"*"`: allows all origins
/// - Empty list: localhost only
/// - Otherwise: exactly the listed origins; unparsable entries are skipped,
///   and if none survive the layer falls back to localhost only
pub fn build_cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o.trim() == "*") {
        tracing::warn!("CORS: Allowing ALL origins");
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| {
            let trimmed = o.trim();
            match trimmed.parse::<HeaderValue>() {
                Ok(hv) => {
                    tracing::info!("CORS: Allowing origin: {}", trimmed);
                    Some(hv)
                }
                Err(e) => {
                    tracing::warn!("CORS: Invalid origin {:?}: {}", trimmed, e);
                    None
                }
            }
        })
        .collect();

    if allowed.is_empty() {
        if !origins.is_empty() {
            tracing::warn!("CORS: No valid origins configured, defaulting to localhost only");
        }
        return origin_list_cors(
            LOCALHOST_ORIGINS
                .iter()
                .filter_map(|o| o.parse::<HeaderValue>().ok())
                .collect(),
        );
    }

    origin_list_cors(allowed)
}

fn origin_list_cors(origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

// =============================================================================
// ROUTER CREATION
// =============================================================================

/// Create the axum router with all endpoints and middleware.
///
/// Middleware stack (outer to inner):
/// 1. Tracing - logs all requests
/// 2. CORS - handles preflight requests
pub fn create_router(state: AppState, cors_origins: &[String]) -> Router {
    let cors = build_cors_layer(cors_origins);

    Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/products", get(handlers::list_products_handler))
        .route("/products/{id}", get(handlers::get_product_handler))
        .route("/api/products", get(handlers::list_products_handler))
        .route("/api/products/{id}", get(handlers::get_product_handler))
        .route(
            "/graphql",
            get(handlers::graphiql_handler).post(handlers::graphql_handler),
        )
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

// =============================================================================
// SERVER STARTUP
// =============================================================================

/// Start the HTTP server and run until Ctrl+C.
pub async fn run_server(
    config: &ServerConfig,
    catalog: Arc<dyn CatalogQuery>,
) -> Result<(), CatalogError> {
    let state = AppState::new(catalog);
    let router = create_router(state, &config.cors_origins);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| CatalogError::IoError(format!("Bind failed: {}", e)))?;

    tracing::info!("Warehouse HTTP server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| CatalogError::IoError(format!("Server error: {}", e)))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
