use std::sync::Arc;

use tracing::{debug, warn};
use uuid::Uuid;

use crate::application::{EntityStore, UnitOfWork};
use crate::domain::{DomainError, Entity, ServiceResponse};

/// CRUD service for one entity family.
///
/// Mutations never return a store error: they resolve to a failure
/// envelope carrying the error text. `list` propagates store errors.
pub struct EntityService<E: Entity> {
    store: Arc<dyn EntityStore<E>>,
    unit_of_work: Arc<dyn UnitOfWork>,
}

impl<E: Entity> EntityService<E> {
    pub fn new(store: Arc<dyn EntityStore<E>>, unit_of_work: Arc<dyn UnitOfWork>) -> Self {
        Self {
            store,
            unit_of_work,
        }
    }

    pub async fn save(&self, entity: E) -> ServiceResponse<E> {
        let result = async {
            self.store.add(&entity).await?;
            self.unit_of_work.complete().await
        }
        .await;

        match result {
            Ok(()) => {
                debug!("Saved {} {}", E::NAME, entity.id());
                ServiceResponse::success(entity)
            }
            Err(e) => {
                warn!("Failed to save {} {}: {}", E::NAME, entity.id(), e);
                ServiceResponse::failure(format!("An error while saving {}:{}", E::NAME, e))
            }
        }
    }

    pub async fn list(&self) -> Result<Vec<E>, DomainError> {
        self.store.list().await
    }

    pub async fn get_by_id(&self, id: Uuid) -> ServiceResponse<E> {
        match self.load(id).await {
            Ok(entity) => ServiceResponse::success(entity),
            Err(message) => ServiceResponse::failure(message),
        }
    }

    /// Overwrites the stored entity's mutable fields with `entity`'s and
    /// returns the stored entity, not the caller's copy.
    pub async fn update(&self, id: Uuid, entity: E) -> ServiceResponse<E> {
        let mut existing = match self.load(id).await {
            Ok(existing) => existing,
            Err(message) => return ServiceResponse::failure(message),
        };

        existing.overwrite_from(&entity);

        let result = async {
            self.store.update(&existing).await?;
            self.unit_of_work.complete().await
        }
        .await;

        match result {
            Ok(()) => {
                debug!("Updated {} {}", E::NAME, id);
                ServiceResponse::success(existing)
            }
            Err(e) => {
                warn!("Failed to update {} {}: {}", E::NAME, id, e);
                ServiceResponse::failure(format!("An error while updating {}: {}", E::NAME, e))
            }
        }
    }

    /// Returns the removed entity for display; it is no longer persisted.
    pub async fn delete(&self, id: Uuid) -> ServiceResponse<E> {
        let existing = match self.load(id).await {
            Ok(existing) => existing,
            Err(message) => return ServiceResponse::failure(message),
        };

        let result = async {
            self.store.remove(&existing).await?;
            self.unit_of_work.complete().await
        }
        .await;

        match result {
            Ok(()) => {
                debug!("Deleted {} {}", E::NAME, id);
                ServiceResponse::success(existing)
            }
            Err(e) => {
                warn!("Failed to delete {} {}: {}", E::NAME, id, e);
                ServiceResponse::failure(format!(
                    "An error occurred while deleting {}: {}",
                    E::NAME,
                    e
                ))
            }
        }
    }

    async fn load(&self, id: Uuid) -> Result<E, String> {
        match self.store.find_by_id(id).await {
            Ok(Some(entity)) => Ok(entity),
            Ok(None) => Err(not_found::<E>()),
            Err(e) => {
                warn!("Failed to load {} {}: {}", E::NAME, id, e);
                Err(format!("An error occurred while loading {}: {}", E::NAME, e))
            }
        }
    }
}

pub(crate) fn not_found<E: Entity>() -> String {
    format!("{} Not Found", E::NAME)
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicBool, Ordering};

    use async_trait::async_trait;
    use tokio::sync::Mutex;

    use super::*;
    use crate::domain::PlantDisease;

    enum Staged<E> {
        Upsert(E),
        Remove(Uuid),
    }

    /// Store and unit of work sharing one staging queue, so commits behave
    /// like the real adapter: nothing is visible until `complete`.
    pub(crate) struct FakeStorage<E: Entity> {
        rows: Mutex<HashMap<Uuid, E>>,
        staged: Mutex<Vec<Staged<E>>>,
        fail_commit: AtomicBool,
    }

    impl<E: Entity> FakeStorage<E> {
        pub(crate) fn new() -> Arc<Self> {
            Arc::new(Self {
                rows: Mutex::new(HashMap::new()),
                staged: Mutex::new(Vec::new()),
                fail_commit: AtomicBool::new(false),
            })
        }

        pub(crate) fn fail_next_commit(&self) {
            self.fail_commit.store(true, Ordering::SeqCst);
        }

        pub(crate) async fn row_count(&self) -> usize {
            self.rows.lock().await.len()
        }
    }

    #[async_trait]
    impl<E: Entity> EntityStore<E> for FakeStorage<E> {
        async fn list(&self) -> Result<Vec<E>, DomainError> {
            Ok(self.rows.lock().await.values().cloned().collect())
        }

        async fn add(&self, entity: &E) -> Result<(), DomainError> {
            self.staged.lock().await.push(Staged::Upsert(entity.clone()));
            Ok(())
        }

        async fn find_by_id(&self, id: Uuid) -> Result<Option<E>, DomainError> {
            Ok(self.rows.lock().await.get(&id).cloned())
        }

        async fn update(&self, entity: &E) -> Result<(), DomainError> {
            self.staged.lock().await.push(Staged::Upsert(entity.clone()));
            Ok(())
        }

        async fn remove(&self, entity: &E) -> Result<(), DomainError> {
            self.staged.lock().await.push(Staged::Remove(entity.id()));
            Ok(())
        }
    }

    #[async_trait]
    impl<E: Entity> UnitOfWork for FakeStorage<E> {
        async fn complete(&self) -> Result<(), DomainError> {
            let staged = std::mem::take(&mut *self.staged.lock().await);
            if self.fail_commit.swap(false, Ordering::SeqCst) {
                return Err(DomainError::storage("constraint violated"));
            }
            let mut rows = self.rows.lock().await;
            for change in staged {
                match change {
                    Staged::Upsert(entity) => {
                        rows.insert(entity.id(), entity);
                    }
                    Staged::Remove(id) => {
                        rows.remove(&id);
                    }
                }
            }
            Ok(())
        }
    }

    fn service(storage: &Arc<FakeStorage<PlantDisease>>) -> EntityService<PlantDisease> {
        EntityService::new(storage.clone(), storage.clone())
    }

    #[tokio::test]
    async fn test_save_then_get_by_id() {
        let storage = FakeStorage::new();
        let service = service(&storage);
        let disease = PlantDisease::new("Blight", None);

        let saved = service.save(disease.clone()).await;
        assert!(saved.is_success());

        let found = service.get_by_id(disease.id()).await;
        assert_eq!(found.resource(), Some(&disease));
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let storage = FakeStorage::new();
        let service = service(&storage);

        let response = service.get_by_id(Uuid::new_v4()).await;

        assert_eq!(response.message(), "PlantDisease Not Found");
    }

    #[tokio::test]
    async fn test_failed_commit_becomes_failure_envelope() {
        let storage = FakeStorage::new();
        let service = service(&storage);
        storage.fail_next_commit();

        let response = service.save(PlantDisease::new("Blight", None)).await;

        assert!(!response.is_success());
        assert_eq!(
            response.message(),
            "An error while saving PlantDisease:Storage error: constraint violated"
        );
        assert_eq!(storage.row_count().await, 0);
    }

    #[tokio::test]
    async fn test_update_returns_stored_entity_with_patched_fields() {
        let storage = FakeStorage::new();
        let service = service(&storage);
        let disease = PlantDisease::new("Blight", None);
        service.save(disease.clone()).await;

        let patch = PlantDisease::reconstitute(
            Uuid::new_v4(),
            "Late blight".into(),
            Some("Phytophthora".into()),
            false,
            1,
            2,
        );
        let updated = service.update(disease.id(), patch).await;

        let updated = updated.into_resource().expect("updated");
        assert_eq!(updated.id(), disease.id());
        assert_eq!(updated.name(), "Late blight");
        assert_eq!(updated.description(), Some("Phytophthora"));
        assert!(!updated.is_active());
    }

    #[tokio::test]
    async fn test_update_missing_mutates_nothing() {
        let storage = FakeStorage::new();
        let service = service(&storage);
        service.save(PlantDisease::new("Blight", None)).await;

        let response = service
            .update(Uuid::new_v4(), PlantDisease::new("Rust", None))
            .await;

        assert_eq!(response.message(), "PlantDisease Not Found");
        let all = service.list().await.expect("list");
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name(), "Blight");
    }

    #[tokio::test]
    async fn test_delete_failure_keeps_row() {
        let storage = FakeStorage::new();
        let service = service(&storage);
        let disease = PlantDisease::new("Blight", None);
        service.save(disease.clone()).await;
        storage.fail_next_commit();

        let response = service.delete(disease.id()).await;

        assert!(response
            .message()
            .starts_with("An error occurred while deleting PlantDisease: "));
        assert!(service.get_by_id(disease.id()).await.is_success());
    }
}
