//! Villas domain module.
//!
//! This module handles the single resource type served by the API: villa
//! records held in an in-memory store for the lifetime of the process.
//!
//! ## Architecture
//!
//! - `model.rs` - The `Villa` record and its field validation
//! - `seed.rs` - Records the store starts with
//! - `store.rs` - Ordered in-memory collection, searched linearly
//! - `patch.rs` - JSON Patch application for partial updates
//! - `service.rs` - Controller operations over the locked store
//! - `handlers.rs` - axum routes under `/api/VillaAPI`

mod error;
mod handlers;
mod model;
mod patch;
mod seed;
mod service;
mod store;

pub use error::{ErrorBody, FieldErrors, VillaError};
pub use handlers::{BASE_PATH, VillaId, router, villa_location};
pub use model::{NAME_MAX_LEN, Villa};
pub use patch::apply_patch;
pub use seed::seed_villas;
pub use service::VillaService;
pub use store::VillaStore;
