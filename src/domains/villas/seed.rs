//! Seed records loaded into the store at startup.
//!
//! When adding a seed villa, append it to `seed_villas()` with the next id.

use super::model::Villa;

/// Get the villas the store starts with.
pub fn seed_villas() -> Vec<Villa> {
    vec![
        Villa::new(1, "Pool View", 4, 100),
        Villa::new(2, "Beach View", 3, 300),
    ]
}
