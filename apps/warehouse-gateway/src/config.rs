//! # Gateway Configuration
//!
//! Where the warehouse service lives and how long to wait for it.
//!
//! Sources, later ones winning:
//! 1. Built-in defaults
//! 2. Optional TOML file (`base_url`, `timeout_ms`)
//! 3. Environment: `WAREHOUSE_URL`, `WAREHOUSE_TIMEOUT_MS`

use crate::forwarder::GatewayError;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Default downstream base address.
pub const DEFAULT_BASE_URL: &str = "https://warehouse-service";

/// Default outbound timeout: 30 seconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Gateway forwarder configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GatewayConfig {
    /// Base URL of the warehouse service, without the `/api/products` suffix.
    pub base_url: String,
    /// Outbound request timeout in milliseconds. `0` disables the timeout.
    pub timeout_ms: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl GatewayConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, GatewayError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            GatewayError::Config(format!("Cannot read config '{}': {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, GatewayError> {
        toml::from_str(content).map_err(|e| GatewayError::Config(e.to_string()))
    }

    /// Apply `WAREHOUSE_URL` / `WAREHOUSE_TIMEOUT_MS` from the process environment.
    pub fn apply_env(&mut self) -> Result<(), GatewayError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), GatewayError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("WAREHOUSE_URL").filter(|u| !u.is_empty()) {
            self.base_url = url;
        }
        if let Some(raw) = lookup("WAREHOUSE_TIMEOUT_MS") {
            self.timeout_ms = raw.trim().parse().map_err(|_| {
                GatewayError::Config(format!("WAREHOUSE_TIMEOUT_MS is not a number: {raw:?}"))
            })?;
        }
        Ok(())
    }

    /// The outbound timeout, or `None` when disabled.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_ms > 0).then(|| Duration::from_millis(self.timeout_ms))
    }
}

// =============================================================================
// TESTS
// =============================================================================
