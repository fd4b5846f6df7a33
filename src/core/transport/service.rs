//! Transport service - starts the configured transport.

use tracing::info;

use super::{HttpTransport, TransportConfig};
use crate::core::{Result, VillaServer};

/// Transport service - manages the transport layer for the villa API.
pub struct TransportService {
    config: TransportConfig,
}

impl TransportService {
    /// Create a new transport service with the given configuration.
    pub fn new(config: TransportConfig) -> Self {
        Self { config }
    }

    /// Start the transport with the given server.
    ///
    /// This method blocks until the transport is shut down.
    pub async fn run(self, server: VillaServer) -> Result<()> {
        info!("Starting transport: {}", self.config.description());
        HttpTransport::new(self.config).run(server).await?;
        Ok(())
    }
}
