//! Domains module containing business logic organized by bounded contexts.
//!
//! The API currently serves a single domain, `villas`.

pub mod villas;
