//! # Gateway Forwarder
//!
//! Relays a product lookup to the warehouse service and hands back the raw
//! response body.
//!
//! | Downstream outcome            | Result                          |
//! |-------------------------------|---------------------------------|
//! | 2xx                           | `Ok(Some(body))`                |
//! | any other status              | `Ok(None)` ("no data")          |
//! | connect / DNS / timeout error | `Err(GatewayError::Unreachable)`|
//!
//! There is no retry and no fallback.

use crate::config::GatewayConfig;
use thiserror::Error;

/// Errors from the forwarding layer.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The warehouse service could not be reached (refused, DNS, timeout).
    #[error("Cannot reach warehouse service at {url}: {reason}")]
    Unreachable { url: String, reason: String },

    /// The response status was a success but its body could not be read.
    #[error("Failed to read response from {url}: {reason}")]
    Body { url: String, reason: String },

    /// The gateway configuration is invalid.
    #[error("Invalid gateway configuration: {0}")]
    Config(String),
}

/// HTTP forwarder to the warehouse service.
#[derive(Debug, Clone)]
pub struct GatewayForwarder {
    http: reqwest::Client,
    base_url: String,
}

impl GatewayForwarder {
    /// Build a forwarder from configuration.
    pub fn new(config: &GatewayConfig) -> Result<Self, GatewayError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| GatewayError::Config(format!("HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Downstream URL for a product id.
    #[must_use]
    pub fn product_url(&self, id: i32) -> String {
        format!("{}/api/products/{}", self.base_url, id)
    }

    /// GET `<base_url>/api/products/{id}` and relay the body.
    pub async fn fetch_product_info(&self, id: i32) -> Result<Option<String>, GatewayError> {
        let url = self.product_url(id);

        let response = self.http.get(&url).send().await.map_err(|e| {
            tracing::warn!("Warehouse service unreachable at {}: {}", url, e);
            GatewayError::Unreachable {
                url: url.clone(),
                reason: e.to_string(),
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!("Warehouse returned {} for {}, no data", status, url);
            return Ok(None);
        }

        let body = response.text().await.map_err(|e| GatewayError::Body {
            url: url.clone(),
            reason: e.to_string(),
        })?;
        Ok(Some(body))
    }
}

// =============================================================================
// TESTS
// =============================================================================
