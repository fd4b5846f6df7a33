//! Villa API Library
//!
//! This crate provides a small CRUD HTTP API for villa records held in an
//! in-memory store for the lifetime of the process.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, the server handle and the HTTP transport
//! - **domains**: Business logic organized by bounded contexts
//!   - **villas**: The villa record, its store, and the controller routes
//!
//! # Example
//!
//! ```rust,no_run
//! use magic_villa_api::core::{Config, TransportService, VillaServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let server = VillaServer::new(config.clone());
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use crate::core::{Config, Error, Result, VillaServer};
