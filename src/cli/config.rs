//! Service configuration file
//!
//! ```json
//! {
//!   "http": { "host": "0.0.0.0", "port": 8080, "cors_origins": [] },
//!   "data_file": "./ticks.json",
//!   "log_level": "INFO"
//! }
//! ```
//!
//! Every key is optional; `{}` yields the defaults.

use std::fs;
use std::path::{Path, PathBuf};

use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};

use crate::http_server::HttpServerConfig;
use crate::observability::Severity;

use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// HTTP listener settings
    #[serde(default)]
    pub http: HttpServerConfig,

    /// JSON array of tick records served by the file store.
    /// When absent the service starts over an empty in-memory store.
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    /// Minimum log severity (default "INFO")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "INFO".to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            http: HttpServerConfig::default(),
            data_file: None,
            log_level: default_log_level(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::config_error(format!(
                "Failed to read config '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_json(&content)
    }

    /// Parse and validate configuration JSON
    pub fn from_json(content: &str) -> CliResult<Self> {
        let config: ServiceConfig = serde_json::from_str(content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.http.port == 0 {
            return Err(CliError::config_error("http.port must be > 0"));
        }

        self.severity()?;

        for origin in &self.http.cors_origins {
            HeaderValue::from_str(origin).map_err(|_| {
                CliError::config_error(format!(
                    "http.cors_origins entry '{}' is not a valid origin",
                    origin.escape_debug()
                ))
            })?;
        }

        if let Some(data_file) = &self.data_file {
            if !data_file.is_file() {
                return Err(CliError::config_error(format!(
                    "data_file '{}' does not exist",
                    data_file.display()
                )));
            }
        }

        Ok(())
    }

    /// Parsed log severity
    pub fn severity(&self) -> CliResult<Severity> {
        self.log_level.parse().map_err(CliError::config_error)
    }
}
