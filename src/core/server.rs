//! Villa server handle and lifecycle management.
//!
//! `VillaServer` owns the configuration and the domain services. It is
//! cheap to clone and is what the transport layer serves.

use std::sync::Arc;
use tracing::info;

use super::config::Config;
use crate::domains::villas::VillaService;

/// The villa API server.
#[derive(Clone)]
pub struct VillaServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Service owning the villa store.
    villa_service: Arc<VillaService>,
}

impl VillaServer {
    /// Create a new server with the given configuration.
    pub fn new(config: Config) -> Self {
        let villa_service = Arc::new(VillaService::new(config.villas.clone()));
        Self::with_service(config, villa_service)
    }

    /// Create a server over an existing villa service.
    pub fn with_service(config: Config, villa_service: Arc<VillaService>) -> Self {
        info!("Server {} v{} created", config.server.name, config.server.version);
        Self {
            config: Arc::new(config),
            villa_service,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the villa service.
    pub fn villas(&self) -> &Arc<VillaService> {
        &self.villa_service
    }
}
