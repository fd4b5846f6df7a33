//! Transport layer for the villa API.
//!
//! The API is served over HTTP with axum. The transport owns the listener,
//! mounts the domain routers, and applies the CORS and tracing layers.

mod config;
mod error;
pub mod http;
mod service;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use http::HttpTransport;
pub use service::TransportService;
