//! Configuration management for the villa API.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables or defaults.

use super::error::Result;
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};

/// Main configuration structure for the villa API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Villas domain configuration.
    pub villas: VillaConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported by `GET /`.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the villas domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VillaConfig {
    /// Load the seed villas into the store at startup.
    pub seed_data: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "villa-api".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl Default for VillaConfig {
    fn default() -> Self {
        Self { seed_data: true }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Parse a boolean flag, treating `false`, `0`, `no` and `off` as false.
pub(crate) fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_lowercase().as_str(),
        "false" | "0" | "no" | "off"
    )
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `VILLA_`.
    /// For example: `VILLA_SERVER_NAME`, `VILLA_LOG_LEVEL`.
    ///
    /// Fails with a configuration error when a set variable cannot be parsed.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("VILLA_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("VILLA_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(seed) = std::env::var("VILLA_SEED_DATA") {
            config.villas.seed_data = parse_flag(&seed);
        }

        config.transport = TransportConfig::from_env()?;

        Ok(config)
    }
}
