//! # Warehouse - Product Catalog Service
//!
//! The main binary for the warehouse catalog service.
//!
//! This application provides:
//! - HTTP REST API (axum-based)
//! - GraphQL API (async-graphql)
//! - CLI interface for inspecting seed data and the schema
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                apps/warehouse (THE SERVICE)              │
//! │                                                          │
//! │   ┌─────────────┐    ┌─────────────┐    ┌───────────┐    │
//! │   │  REST API   │    │  GraphQL    │    │   CLI     │    │
//! │   │  (axum)     │    │ (async-gql) │    │  (clap)   │    │
//! │   └──────┬──────┘    └──────┬──────┘    └─────┬─────┘    │
//! │          └──────────────────┼─────────────────┘          │
//! │                             ▼                            │
//! │                   ┌──────────────────┐                   │
//! │                   │  warehouse-core  │                   │
//! │                   │  (THE CATALOG)   │                   │
//! │                   └──────────────────┘                   │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Start the HTTP server
//! warehouse server --host 0.0.0.0 --port 8080 --seed products.json
//!
//! # CLI operations
//! warehouse products --seed products.json
//! warehouse product --id 1 --seed products.json
//! warehouse schema
//! ```

mod cli;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

#[tokio::main]
async fn main() {
    // Initialize tracing — WAREHOUSE_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("WAREHOUSE_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "warehouse=info,tower_http=debug".into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }

    let cli = cli::Cli::parse();

    if !cli.quiet {
        print_banner();
    }

    if let Err(e) = cli::execute(cli).await {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the startup banner.
fn print_banner() {
    println!(
        r#"
  Warehouse Catalog Service v{}

  REST • GraphQL • In-memory
"#,
        env!("CARGO_PKG_VERSION")
    );
}
