//! Tracker configuration.
//!
//! All fields have defaults matching the original deployment (5 s refresh,
//! 700×500 map); a YAML file can override any subset of them.

use crate::api::DEFAULT_API_URL;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Runtime configuration for the tracker service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Position API endpoint.
    pub api_url: String,
    /// Refresh interval in milliseconds.
    pub refresh_interval_ms: u64,
    /// HTTP listen port for the dashboard and JSON API.
    pub http_port: u16,
    /// Map widget width in pixels.
    pub map_width: u32,
    /// Map widget height in pixels.
    pub map_height: u32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            refresh_interval_ms: 5000,
            http_port: 8080,
            map_width: 700,
            map_height: 500,
        }
    }
}

impl TrackerConfig {
    /// Load configuration from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::IoError(e.to_string()))?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
}
