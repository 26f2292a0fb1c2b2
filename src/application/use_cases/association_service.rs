use std::sync::Arc;

use tracing::{debug, warn};
use uuid::Uuid;

use crate::application::{AssociationStore, EntityStore, UnitOfWork};
use crate::domain::{Association, DomainError, Entity, ServiceResponse};

use super::entity_service::not_found;

#[derive(Debug, Clone, Copy)]
enum EdgeOperation {
    Assign,
    Unassign,
}

impl EdgeOperation {
    fn verb(self) -> &'static str {
        match self {
            EdgeOperation::Assign => "assigning",
            EdgeOperation::Unassign => "unassigning",
        }
    }
}

/// Links and unlinks the two sides of an association edge.
///
/// Neither id is checked before the join write; the store's constraints
/// decide whether the write is valid, and a rejected commit becomes a
/// failure envelope.
pub struct AssociationService<A: Association> {
    edges: Arc<dyn AssociationStore<A>>,
    children: Arc<dyn EntityStore<A::Child>>,
    unit_of_work: Arc<dyn UnitOfWork>,
}

impl<A: Association> AssociationService<A> {
    pub fn new(
        edges: Arc<dyn AssociationStore<A>>,
        children: Arc<dyn EntityStore<A::Child>>,
        unit_of_work: Arc<dyn UnitOfWork>,
    ) -> Self {
        Self {
            edges,
            children,
            unit_of_work,
        }
    }

    pub async fn list_by_parent_id(&self, parent_id: Uuid) -> Result<Vec<A::Child>, DomainError> {
        self.edges.list_by_parent_id(parent_id).await
    }

    pub async fn assign(&self, parent_id: Uuid, child_id: Uuid) -> ServiceResponse<A::Child> {
        self.apply(EdgeOperation::Assign, parent_id, child_id).await
    }

    pub async fn unassign(&self, parent_id: Uuid, child_id: Uuid) -> ServiceResponse<A::Child> {
        self.apply(EdgeOperation::Unassign, parent_id, child_id).await
    }

    async fn apply(
        &self,
        operation: EdgeOperation,
        parent_id: Uuid,
        child_id: Uuid,
    ) -> ServiceResponse<A::Child> {
        let result = async {
            match operation {
                EdgeOperation::Assign => self.edges.assign(parent_id, child_id).await?,
                EdgeOperation::Unassign => self.edges.unassign(parent_id, child_id).await?,
            }
            self.unit_of_work.complete().await?;
            self.children.find_by_id(child_id).await
        }
        .await;

        match result {
            Ok(Some(child)) => {
                debug!(
                    "Finished {} {} {} for {} {}",
                    operation.verb(),
                    <A::Child as Entity>::NAME,
                    child_id,
                    <A::Parent as Entity>::NAME,
                    parent_id
                );
                ServiceResponse::success(child)
            }
            Ok(None) => ServiceResponse::failure(not_found::<A::Child>()),
            Err(e) => {
                warn!(
                    "Failed {} {} {} to {} {}: {}",
                    operation.verb(),
                    <A::Child as Entity>::NAME,
                    child_id,
                    <A::Parent as Entity>::NAME,
                    parent_id,
                    e
                );
                ServiceResponse::failure(format!(
                    "An error occurred while {} {} to {}: {}",
                    operation.verb(),
                    <A::Child as Entity>::NAME,
                    <A::Parent as Entity>::NAME,
                    e
                ))
            }
        }
    }
}
