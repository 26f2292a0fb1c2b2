use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Association, DomainError};

/// Persistence for the join rows of one association edge.
#[async_trait]
pub trait AssociationStore<A: Association>: Send + Sync {
    /// Children linked to `parent_id`, projected from the join rows.
    async fn list_by_parent_id(&self, parent_id: Uuid) -> Result<Vec<A::Child>, DomainError>;

    /// Stages a join row. Assigning an existing pair is a no-op at commit.
    async fn assign(&self, parent_id: Uuid, child_id: Uuid) -> Result<(), DomainError>;

    /// Stages removal of a join row.
    async fn unassign(&self, parent_id: Uuid, child_id: Uuid) -> Result<(), DomainError>;
}
