use uuid::Uuid;

use crate::domain::{
    DomainError, ServiceResponse, UserConcept, UserConceptConceptType, UserConceptUser,
};

use super::{AssociationService, EntityService};

/// User concepts plus their edges to users and concept types.
pub struct UserConceptService {
    concepts: EntityService<UserConcept>,
    users: AssociationService<UserConceptUser>,
    concept_types: AssociationService<UserConceptConceptType>,
}

impl UserConceptService {
    pub fn new(
        concepts: EntityService<UserConcept>,
        users: AssociationService<UserConceptUser>,
        concept_types: AssociationService<UserConceptConceptType>,
    ) -> Self {
        Self {
            concepts,
            users,
            concept_types,
        }
    }

    pub async fn save(&self, user_concept: UserConcept) -> ServiceResponse<UserConcept> {
        self.concepts.save(user_concept).await
    }

    pub async fn list(&self) -> Result<Vec<UserConcept>, DomainError> {
        self.concepts.list().await
    }

    pub async fn get_by_id(&self, user_concept_id: Uuid) -> ServiceResponse<UserConcept> {
        self.concepts.get_by_id(user_concept_id).await
    }

    pub async fn update(
        &self,
        user_concept_id: Uuid,
        user_concept: UserConcept,
    ) -> ServiceResponse<UserConcept> {
        self.concepts.update(user_concept_id, user_concept).await
    }

    pub async fn delete(&self, user_concept_id: Uuid) -> ServiceResponse<UserConcept> {
        self.concepts.delete(user_concept_id).await
    }

    // User edge

    pub async fn list_by_user_id(&self, user_id: Uuid) -> Result<Vec<UserConcept>, DomainError> {
        self.users.list_by_parent_id(user_id).await
    }

    pub async fn assign_user_concept_to_user(
        &self,
        user_id: Uuid,
        user_concept_id: Uuid,
    ) -> ServiceResponse<UserConcept> {
        self.users.assign(user_id, user_concept_id).await
    }

    pub async fn unassign_user_concept_to_user(
        &self,
        user_id: Uuid,
        user_concept_id: Uuid,
    ) -> ServiceResponse<UserConcept> {
        self.users.unassign(user_id, user_concept_id).await
    }

    // ConceptType edge

    pub async fn list_by_concept_type_id(
        &self,
        concept_type_id: Uuid,
    ) -> Result<Vec<UserConcept>, DomainError> {
        self.concept_types.list_by_parent_id(concept_type_id).await
    }

    pub async fn assign_user_concept_to_concept_type(
        &self,
        concept_type_id: Uuid,
        user_concept_id: Uuid,
    ) -> ServiceResponse<UserConcept> {
        self.concept_types
            .assign(concept_type_id, user_concept_id)
            .await
    }

    pub async fn unassign_user_concept_to_concept_type(
        &self,
        concept_type_id: Uuid,
        user_concept_id: Uuid,
    ) -> ServiceResponse<UserConcept> {
        self.concept_types
            .unassign(concept_type_id, user_concept_id)
            .await
    }
}
