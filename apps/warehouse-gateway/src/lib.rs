//! # Warehouse Gateway
//!
//! API gateway forwarder in front of the warehouse service.

pub mod config;
pub mod forwarder;

pub use config::GatewayConfig;
pub use forwarder::{GatewayError, GatewayForwarder};
