//! Villa service implementation.
//!
//! The VillaService owns the store and implements every controller
//! operation independently of HTTP. Each operation holds the store lock
//! for its whole check-then-act sequence.

use json_patch::Patch;
use tokio::sync::RwLock;
use tracing::{error, info, warn};

use super::error::VillaError;
use super::model::Villa;
use super::patch::apply_patch;
use super::store::VillaStore;
use crate::core::config::VillaConfig;

/// Service for reading and mutating villa records.
#[derive(Debug)]
pub struct VillaService {
    store: RwLock<VillaStore>,
}

impl VillaService {
    /// Create a new VillaService with the given configuration.
    pub fn new(config: VillaConfig) -> Self {
        info!("Initializing VillaService (seed data: {})", config.seed_data);

        let store = if config.seed_data {
            VillaStore::seeded()
        } else {
            info!("Seed data disabled, starting with an empty store");
            VillaStore::new()
        };

        Self::with_store(store)
    }

    /// Create a service over an existing store.
    pub fn with_store(store: VillaStore) -> Self {
        info!("Villa store ready with {} records", store.len());
        Self {
            store: RwLock::new(store),
        }
    }

    /// List all villas in store order.
    pub async fn list(&self) -> Vec<Villa> {
        info!("Getting all villas");
        self.store.read().await.all().to_vec()
    }

    /// Get a villa by id.
    pub async fn get(&self, id: i64) -> Result<Villa, VillaError> {
        if id == 0 {
            error!("Get villa error with id: {}", id);
            return Err(VillaError::bad_request("Villa id must not be 0"));
        }

        self.store
            .read()
            .await
            .find(id)
            .cloned()
            .ok_or(VillaError::NotFound(id))
    }

    /// Create a villa, assigning it the next id.
    pub async fn create(&self, villa: Option<Villa>) -> Result<Villa, VillaError> {
        let Some(villa) = villa else {
            warn!("Create villa rejected: missing body");
            return Err(VillaError::bad_request("Villa body is required"));
        };

        villa.validate()?;

        let mut store = self.store.write().await;

        if store.contains_name(&villa.name) {
            warn!("Create villa rejected: duplicate name {:?}", villa.name);
            return Err(VillaError::DuplicateName(villa.name));
        }

        if villa.id != 0 {
            error!("Create villa rejected: caller supplied id {}", villa.id);
            return Err(VillaError::IdSupplied(villa.id));
        }

        let created = store.insert(villa);
        info!("Created villa {} ({})", created.id, created.name);
        Ok(created)
    }

    /// Delete a villa by id.
    pub async fn delete(&self, id: i64) -> Result<(), VillaError> {
        if id == 0 {
            return Err(VillaError::bad_request("Villa id must not be 0"));
        }

        let removed = self
            .store
            .write()
            .await
            .remove(id)
            .ok_or(VillaError::NotFound(id))?;

        info!("Deleted villa {} ({})", removed.id, removed.name);
        Ok(())
    }

    /// Replace the name, occupancy and area of an existing villa.
    pub async fn replace(&self, id: i64, villa: Option<Villa>) -> Result<(), VillaError> {
        let villa = match villa {
            Some(v) if v.id == id => v,
            Some(v) => {
                warn!("Replace villa rejected: body id {} != path id {}", v.id, id);
                return Err(VillaError::bad_request(format!(
                    "Body id {} does not match path id {}",
                    v.id, id
                )));
            }
            None => return Err(VillaError::bad_request("Villa body is required")),
        };

        villa.validate()?;

        let mut store = self.store.write().await;
        let stored = store.find_mut(id).ok_or(VillaError::NotFound(id))?;
        stored.replace_from(&villa);

        info!("Replaced villa {}", id);
        Ok(())
    }

    /// Apply a JSON Patch document to an existing villa.
    ///
    /// Validation failures are reported and leave the stored record as it was.
    /// A missing villa is a bad request rather than not found.
    pub async fn patch(&self, id: i64, patch: Option<Patch>) -> Result<(), VillaError> {
        let Some(patch) = patch else {
            return Err(VillaError::bad_request("Patch document is required"));
        };
        if id == 0 {
            return Err(VillaError::bad_request("Villa id must not be 0"));
        }

        let mut store = self.store.write().await;
        let Some(stored) = store.find_mut(id) else {
            warn!("Patch villa rejected: no villa with id {}", id);
            return Err(VillaError::bad_request(format!("No villa with id {}", id)));
        };

        let patched = apply_patch(stored, &patch)?;
        *stored = patched;

        info!("Patched villa {} with {} operations", id, patch.0.len());
        Ok(())
    }

    /// Number of stored villas.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn service() -> VillaService {
        VillaService::new(VillaConfig::default())
    }

    fn ab_service() -> VillaService {
        VillaService::with_store(VillaStore::from_villas(vec![
            Villa::new(1, "A", 1, 10),
            Villa::new(2, "B", 2, 20),
        ]))
    }

    fn new_villa(name: &str) -> Villa {
        Villa::new(0, name, 2, 50)
    }

    fn patch(ops: serde_json::Value) -> Option<Patch> {
        Some(serde_json::from_value(ops).unwrap())
    }

    #[tokio::test]
    async fn test_list_ids_unique_and_positive() {
        let service = service();
        service.create(Some(new_villa("Garden"))).await.unwrap();
        let villas = service.list().await;
        let mut ids: Vec<_> = villas.iter().map(|v| v.id).collect();
        assert!(ids.iter().all(|&id| id > 0));
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), villas.len());
    }

    #[tokio::test]
    async fn test_get_zero_is_bad_request() {
        let err = service().get(0).await.unwrap_err();
        assert!(matches!(err, VillaError::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_get_unknown_is_not_found() {
        let err = service().get(42).await.unwrap_err();
        assert!(matches!(err, VillaError::NotFound(42)));
    }

    #[tokio::test]
    async fn test_get_existing_returns_stored_record() {
        let villa = service().get(2).await.unwrap();
        assert_eq!(villa, Villa::new(2, "Beach View", 3, 300));
    }

    #[tokio::test]
    async fn test_create_assigns_next_id() {
        let service = service();
        let created = service.create(Some(new_villa("Garden"))).await.unwrap();
        assert_eq!(created.id, 3);
        assert_eq!(service.len().await, 3);
        assert_eq!(service.get(3).await.unwrap(), created);
    }

    #[tokio::test]
    async fn test_create_duplicate_name_any_case() {
        let service = service();
        let err = service
            .create(Some(new_villa("pOOL vIEW")))
            .await
            .unwrap_err();
        assert!(matches!(err, VillaError::DuplicateName(_)));
        assert_eq!(service.len().await, 2);
    }

    #[tokio::test]
    async fn test_create_missing_body() {
        let err = service().create(None).await.unwrap_err();
        assert!(matches!(err, VillaError::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_create_with_id_is_internal_error() {
        let service = service();
        let err = service
            .create(Some(Villa::new(9, "Garden", 1, 1)))
            .await
            .unwrap_err();
        assert!(matches!(err, VillaError::IdSupplied(9)));
        assert_eq!(service.len().await, 2);
    }

    #[tokio::test]
    async fn test_create_invalid_name() {
        let err = service().create(Some(new_villa(""))).await.unwrap_err();
        assert!(matches!(err, VillaError::Validation(_)));
    }

    #[tokio::test]
    async fn test_create_into_empty_store_starts_at_one() {
        let service = VillaService::new(VillaConfig { seed_data: false });
        let created = service.create(Some(new_villa("First"))).await.unwrap();
        assert_eq!(created.id, 1);
    }

    #[tokio::test]
    async fn test_delete_then_delete_again() {
        let service = service();
        service.delete(1).await.unwrap();
        assert_eq!(service.len().await, 1);
        let err = service.delete(1).await.unwrap_err();
        assert!(matches!(err, VillaError::NotFound(1)));
    }

    #[tokio::test]
    async fn test_delete_zero_is_bad_request() {
        let err = service().delete(0).await.unwrap_err();
        assert!(matches!(err, VillaError::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_replace_mismatched_id_leaves_store() {
        let service = service();
        let err = service
            .replace(1, Some(Villa::new(2, "Other", 1, 1)))
            .await
            .unwrap_err();
        assert!(matches!(err, VillaError::BadRequest(_)));
        assert_eq!(service.get(1).await.unwrap().name, "Pool View");
    }

    #[tokio::test]
    async fn test_replace_unknown_is_not_found() {
        let err = service()
            .replace(5, Some(Villa::new(5, "Other", 1, 1)))
            .await
            .unwrap_err();
        assert!(matches!(err, VillaError::NotFound(5)));
    }

    #[tokio::test]
    async fn test_replace_copies_core_fields_only() {
        let service = service();
        let mut body = Villa::new(1, "Pool Deck", 8, 120);
        body.amenity = Some("Bar".to_string());
        service.replace(1, Some(body)).await.unwrap();

        let stored = service.get(1).await.unwrap();
        assert_eq!(stored.name, "Pool Deck");
        assert_eq!(stored.occupancy, 8);
        assert_eq!(stored.sqft, 120);
        assert!(stored.amenity.is_none());
    }

    #[tokio::test]
    async fn test_replace_missing_body() {
        let service = service();
        let err = service.replace(1, None).await.unwrap_err();
        assert!(matches!(err, VillaError::BadRequest(_)));
        assert_eq!(service.get(1).await.unwrap().name, "Pool View");
    }

    #[tokio::test]
    async fn test_replace_invalid_name() {
        let service = service();
        let long_name = "x".repeat(31);
        for name in ["", long_name.as_str()] {
            let err = service
                .replace(1, Some(Villa::new(1, name, 1, 1)))
                .await
                .unwrap_err();
            assert!(matches!(err, VillaError::Validation(_)));
        }
        assert_eq!(service.get(1).await.unwrap(), Villa::new(1, "Pool View", 4, 100));
    }

    #[tokio::test]
    async fn test_patch_replaces_unset_description_on_seed() {
        let service = service();
        service
            .patch(
                1,
                patch(json!([{ "op": "replace", "path": "/details", "value": "Renovated" }])),
            )
            .await
            .unwrap();
        assert_eq!(
            service.get(1).await.unwrap().details.as_deref(),
            Some("Renovated")
        );
    }

    #[tokio::test]
    async fn test_patch_applies_in_place() {
        let service = service();
        service
            .patch(
                2,
                patch(json!([{ "op": "replace", "path": "/occupancy", "value": 10 }])),
            )
            .await
            .unwrap();
        assert_eq!(service.get(2).await.unwrap().occupancy, 10);
    }

    #[tokio::test]
    async fn test_patch_missing_villa_is_bad_request() {
        let err = service()
            .patch(
                77,
                patch(json!([{ "op": "replace", "path": "/name", "value": "X" }])),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, VillaError::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_patch_zero_or_missing_document() {
        let service = service();
        assert!(matches!(
            service.patch(0, patch(json!([]))).await.unwrap_err(),
            VillaError::BadRequest(_)
        ));
        assert!(matches!(
            service.patch(1, None).await.unwrap_err(),
            VillaError::BadRequest(_)
        ));
    }

    #[tokio::test]
    async fn test_patch_validation_failure_leaves_record() {
        let service = service();
        let err = service
            .patch(
                1,
                patch(json!([{ "op": "replace", "path": "/name", "value": "" }])),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, VillaError::Validation(_)));
        assert_eq!(service.get(1).await.unwrap().name, "Pool View");
    }

    #[tokio::test]
    async fn test_store_scenario() {
        let service = ab_service();

        let created = service.create(Some(new_villa("C"))).await.unwrap();
        assert_eq!(created.id, 3);
        assert_eq!(service.len().await, 3);

        service.delete(1).await.unwrap();
        let ids: Vec<_> = service.list().await.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![2, 3]);

        assert!(matches!(
            service.get(1).await.unwrap_err(),
            VillaError::NotFound(1)
        ));

        service
            .replace(2, Some(Villa::new(2, "B2", 2, 20)))
            .await
            .unwrap();
        assert_eq!(service.get(2).await.unwrap().name, "B2");
    }

    #[tokio::test]
    async fn test_concurrent_creates_get_distinct_ids() {
        let service = std::sync::Arc::new(service());
        let mut handles = Vec::new();
        for i in 0..16 {
            let service = service.clone();
            handles.push(tokio::spawn(async move {
                service.create(Some(new_villa(&format!("Villa {}", i)))).await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let villas = service.list().await;
        let mut ids: Vec<_> = villas.iter().map(|v| v.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 18);
    }

    #[tokio::test]
    async fn test_concurrent_duplicate_creates_admit_one() {
        let service = std::sync::Arc::new(service());
        let mut handles = Vec::new();
        for _ in 0..8 {
            let service = service.clone();
            handles.push(tokio::spawn(async move {
                service.create(Some(new_villa("Same Name"))).await
            }));
        }
        let mut ok = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                ok += 1;
            }
        }
        assert_eq!(ok, 1);
        assert_eq!(service.len().await, 3);
    }
}
