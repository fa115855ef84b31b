//! # Warehouse Gateway
//!
//! Entry point for the gateway forwarder.
//!
//! Reads configuration from an optional TOML file, then environment variables:
//! - `WAREHOUSE_URL` — warehouse service base URL (default: `https://warehouse-service`)
//! - `WAREHOUSE_TIMEOUT_MS` — outbound timeout in milliseconds, `0` for none (default: 30000)
//!
//! The relayed body goes to stdout; logs go to stderr. A "no data" result
//! prints `null`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use warehouse_gateway::{GatewayConfig, GatewayError, GatewayForwarder};

/// Warehouse API gateway
#[derive(Parser, Debug)]
#[command(name = "warehouse-gateway")]
#[command(version, about, long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch product info from the warehouse service
    Fetch {
        /// Product ID
        #[arg(short, long)]
        id: i32,
    },
}

#[tokio::main]
async fn main() {
    // Logging to stderr only — stdout carries the relayed body.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warehouse_gateway=info".into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), GatewayError> {
    let mut config = match &cli.config {
        Some(path) => GatewayConfig::load(path)?,
        None => GatewayConfig::default(),
    };
    config.apply_env()?;

    tracing::info!("Warehouse gateway target: {}", config.base_url);

    let forwarder = GatewayForwarder::new(&config)?;

    match cli.command {
        Commands::Fetch { id } => match forwarder.fetch_product_info(id).await? {
            Some(body) => println!("{}", body),
            None => println!("null"),
        },
    }
    Ok(())
}
