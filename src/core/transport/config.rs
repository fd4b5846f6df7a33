//! Transport configuration types.

use serde::{Deserialize, Serialize};

use crate::core::config::parse_flag;
use crate::core::{Error, Result};

/// HTTP transport configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransportConfig {
    /// Port number to listen on.
    pub port: u16,

    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Enable CORS for browser clients.
    #[serde(default = "default_cors")]
    pub enable_cors: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_cors() -> bool {
    true
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
            enable_cors: default_cors(),
        }
    }
}

impl TransportConfig {
    /// Load transport config from environment variables.
    pub fn from_env() -> Result<Self> {
        let port = match std::env::var("VILLA_HTTP_PORT") {
            Ok(p) => p
                .trim()
                .parse()
                .map_err(|e| Error::config(format!("invalid VILLA_HTTP_PORT {:?}: {}", p, e)))?,
            Err(_) => default_port(),
        };
        let host = std::env::var("VILLA_HTTP_HOST").unwrap_or_else(|_| default_host());
        let enable_cors = std::env::var("VILLA_HTTP_CORS")
            .map(|v| parse_flag(&v))
            .unwrap_or_else(|_| default_cors());

        Ok(Self {
            port,
            host,
            enable_cors,
        })
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get a description of this transport for logging.
    pub fn description(&self) -> String {
        format!("HTTP on {}", self.address())
    }
}
