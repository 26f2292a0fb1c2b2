use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{DomainError, Entity};

/// Persistence for one entity family.
///
/// Mutating calls only stage their change on the request's unit of work;
/// nothing is durable until [`UnitOfWork::complete`](super::UnitOfWork::complete)
/// succeeds. Reads observe committed state.
#[async_trait]
pub trait EntityStore<E: Entity>: Send + Sync {
    async fn list(&self) -> Result<Vec<E>, DomainError>;

    async fn add(&self, entity: &E) -> Result<(), DomainError>;

    /// `Ok(None)` means the id is not present; it is not an error.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<E>, DomainError>;

    async fn update(&self, entity: &E) -> Result<(), DomainError>;

    async fn remove(&self, entity: &E) -> Result<(), DomainError>;
}
