//! # Server Configuration
//!
//! Optional TOML configuration for the warehouse server.
//!
//! ```toml
//! host = "0.0.0.0"
//! port = 8080
//! seed = "products.json"
//! cors_origins = ["https://shop.example"]
//! ```
//!
//! Every key is optional. Command-line flags override values from the file.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use warehouse_core::CatalogError;

/// Default bind host.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default bind port.
pub const DEFAULT_PORT: u16 = 8080;

/// Warehouse server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Host to bind to.
    pub host: String,
    /// Port to bind to.
    pub port: u16,
    /// JSON seed file loaded into the catalog at startup.
    pub seed: Option<PathBuf>,
    /// Allowed CORS origins. Empty means localhost only; `"*"` allows all.
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            seed: None,
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CatalogError::IoError(format!("Cannot read config '{}': {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        toml::from_str(content)
            .map_err(|e| CatalogError::SerializationError(format!("Invalid config: {}", e)))
    }

    /// Socket address string, `host:port`.
    #[must_use]
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_config_uses_defaults() {
        let config = ServerConfig::from_toml_str("").expect("parse");
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.addr(), "127.0.0.1:8080");
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let config = ServerConfig::from_toml_str("port = 9090\nseed = \"items.json\"").expect("parse");
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.port, 9090);
        assert_eq!(config.seed, Some(PathBuf::from("items.json")));
    }

    #[test]
    fn cors_origins_from_file() {
        let config = ServerConfig::from_toml_str(
            "cors_origins = [\"https://a.example\", \"https://b.example\"]",
        )
        .expect("parse");
        assert_eq!(config.cors_origins, vec!["https://a.example", "https://b.example"]);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = ServerConfig::from_toml_str("prot = 1").expect_err("typo must fail");
        assert!(matches!(err, CatalogError::SerializationError(_)));
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        writeln!(file, "host = \"0.0.0.0\"").expect("write");

        let config = ServerConfig::load(file.path()).expect("load");
        assert_eq!(config.addr(), "0.0.0.0:8080");
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = ServerConfig::load(Path::new("/nonexistent/warehouse.toml")).expect_err("missing");
        assert!(matches!(err, CatalogError::IoError(_)));
    }
}
