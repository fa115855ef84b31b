//! # Warehouse CLI Module
//!
//! This module implements the CLI interface for the warehouse service.
//!
//! ## Available Commands
//!
//! - `server` - Start the HTTP server (REST + GraphQL)
//! - `products` - List the products in a seed file
//! - `product` - Show one product from a seed file
//! - `schema` - Print the GraphQL schema (SDL)

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use warehouse_core::CatalogError;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Warehouse - product catalog service
///
/// Serves one in-memory product catalog over REST and GraphQL.
#[derive(Parser, Debug)]
#[command(name = "warehouse")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start HTTP server
    Server {
        /// TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Host to bind to (overrides config)
        #[arg(short = 'H', long)]
        host: Option<String>,

        /// Port to bind to (overrides config)
        #[arg(short, long)]
        port: Option<u16>,

        /// JSON seed file (overrides config)
        #[arg(short, long)]
        seed: Option<PathBuf>,

        /// Allowed CORS origin, repeatable; "*" allows all (overrides config)
        #[arg(long = "cors-origin")]
        cors_origins: Vec<String>,
    },

    /// List the products in a seed file
    Products {
        /// JSON seed file
        #[arg(short, long)]
        seed: PathBuf,
    },

    /// Show one product from a seed file
    Product {
        /// Product ID
        #[arg(short, long)]
        id: i32,

        /// JSON seed file
        #[arg(short, long)]
        seed: PathBuf,
    },

    /// Print the GraphQL schema
    Schema,
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub async fn execute(cli: Cli) -> Result<(), CatalogError> {
    let json_mode = cli.json_mode;

    match cli.command {
        Commands::Server {
            config,
            host,
            port,
            seed,
            cors_origins,
        } => cmd_server(config, host, port, seed, cors_origins).await,
        Commands::Products { seed } => cmd_products(&seed, json_mode),
        Commands::Product { id, seed } => cmd_product(&seed, id, json_mode),
        Commands::Schema => cmd_schema(),
    }
}
