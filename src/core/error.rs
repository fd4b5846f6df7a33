//! Error types and handling for the villa API.
//!
//! This module defines a unified error type that can represent errors from
//! the villas domain, the transport, and configuration loading.

use thiserror::Error;

/// A specialized Result type for villa API operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the villa API.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the villas domain.
    #[error("Villa error: {0}")]
    Villa(#[from] crate::domains::villas::VillaError),

    /// Error originating from the transport layer.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
