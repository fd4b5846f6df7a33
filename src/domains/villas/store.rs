//! In-memory villa store.
//!
//! An ordered sequence of records, searched linearly. The store itself is
//! not synchronized; `VillaService` owns it behind a lock.

use super::model::Villa;
use super::seed::seed_villas;

/// Ordered collection of villa records for the process lifetime.
#[derive(Debug, Clone, Default)]
pub struct VillaStore {
    villas: Vec<Villa>,
}

impl VillaStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store populated with the seed records.
    pub fn seeded() -> Self {
        Self::from_villas(seed_villas())
    }

    /// Create a store holding the given records, in order.
    pub fn from_villas(villas: Vec<Villa>) -> Self {
        Self { villas }
    }

    /// All records in store order.
    pub fn all(&self) -> &[Villa] {
        &self.villas
    }

    pub fn len(&self) -> usize {
        self.villas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.villas.is_empty()
    }

    /// First record with the given id.
    pub fn find(&self, id: i64) -> Option<&Villa> {
        self.villas.iter().find(|v| v.id == id)
    }

    /// Mutable access to the first record with the given id.
    pub fn find_mut(&mut self, id: i64) -> Option<&mut Villa> {
        self.villas.iter_mut().find(|v| v.id == id)
    }

    /// Whether any record carries this name, ignoring case.
    pub fn contains_name(&self, name: &str) -> bool {
        self.villas.iter().any(|v| v.has_name(name))
    }

    /// Next id to assign: one past the current maximum, or 1 when empty.
    pub fn next_id(&self) -> i64 {
        self.villas.iter().map(|v| v.id).max().unwrap_or(0) + 1
    }

    /// Assign the next id to `villa`, append it, and return the stored copy.
    pub fn insert(&mut self, mut villa: Villa) -> Villa {
        villa.id = self.next_id();
        self.villas.push(villa.clone());
        villa
    }

    /// Remove the first record with the given id.
    pub fn remove(&mut self, id: i64) -> Option<Villa> {
        let index = self.villas.iter().position(|v| v.id == id)?;
        Some(self.villas.remove(index))
    }
}
