//! # API Endpoint Handlers
//!
//! This module implements the actual HTTP endpoint handlers.

use super::{
    AppState,
    types::{ErrorResponse, HealthResponse, ProductJson},
};
use async_graphql::http::GraphiQLSource;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use warehouse_core::ProductId;

// =============================================================================
// HEALTH HANDLER
// =============================================================================

/// Health check endpoint.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse::default())
}

// =============================================================================
// PRODUCT HANDLERS
// =============================================================================

/// List every catalog entry in insertion order. Always 200, even when empty.
pub async fn list_products_handler(State(state): State<AppState>) -> impl IntoResponse {
    let products: Vec<ProductJson> = state
        .catalog
        .list_all()
        .into_iter()
        .map(ProductJson::from)
        .collect();

    (StatusCode::OK, Json(products))
}

/// Get one catalog entry by id.
///
/// - 200 with the entry when found
/// - 404 with an empty body when no entry has the id
/// - 400 when the path segment is not an integer; the catalog is not consulted
pub async fn get_product_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Response {
    let id = match raw_id.parse::<ProductId>() {
        Ok(id) => id,
        Err(e) => {
            tracing::debug!("Rejected product lookup: {}", e);
            return (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(e.to_string())))
                .into_response();
        }
    };

    match state.catalog.get_by_id(id) {
        Some(product) => (StatusCode::OK, Json(ProductJson::from(product))).into_response(),
        None => {
            tracing::debug!("Product {} not found", id);
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

// =============================================================================
// GRAPHQL HANDLERS
// =============================================================================

/// Execute a GraphQL request against the catalog schema.
///
/// GraphQL errors (syntax, unknown fields) are reported inside the response
/// body with status 200, per the GraphQL-over-HTTP convention.
pub async fn graphql_handler(
    State(state): State<AppState>,
    Json(request): Json<async_graphql::Request>,
) -> Json<async_graphql::Response> {
    Json(state.schema.execute(request).await)
}

/// Serve the GraphiQL explorer pointed at `/graphql`.
pub async fn graphiql_handler() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}
