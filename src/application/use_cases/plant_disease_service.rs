use uuid::Uuid;

use crate::domain::{
    DomainError, PlantDisease, PlantDiseaseCategoryDisease, ServiceResponse,
    UserConceptPlantDisease,
};

use super::{AssociationService, EntityService};

/// Plant diseases plus their edges to category diseases and user concepts.
pub struct PlantDiseaseService {
    diseases: EntityService<PlantDisease>,
    categories: AssociationService<PlantDiseaseCategoryDisease>,
    user_concepts: AssociationService<UserConceptPlantDisease>,
}

impl PlantDiseaseService {
    pub fn new(
        diseases: EntityService<PlantDisease>,
        categories: AssociationService<PlantDiseaseCategoryDisease>,
        user_concepts: AssociationService<UserConceptPlantDisease>,
    ) -> Self {
        Self {
            diseases,
            categories,
            user_concepts,
        }
    }

    pub async fn save(&self, plant_disease: PlantDisease) -> ServiceResponse<PlantDisease> {
        self.diseases.save(plant_disease).await
    }

    pub async fn list(&self) -> Result<Vec<PlantDisease>, DomainError> {
        self.diseases.list().await
    }

    pub async fn get_by_id(&self, plant_disease_id: Uuid) -> ServiceResponse<PlantDisease> {
        self.diseases.get_by_id(plant_disease_id).await
    }

    pub async fn update(
        &self,
        plant_disease_id: Uuid,
        plant_disease: PlantDisease,
    ) -> ServiceResponse<PlantDisease> {
        self.diseases.update(plant_disease_id, plant_disease).await
    }

    pub async fn delete(&self, plant_disease_id: Uuid) -> ServiceResponse<PlantDisease> {
        self.diseases.delete(plant_disease_id).await
    }

    pub async fn list_by_category_disease_id(
        &self,
        category_disease_id: Uuid,
    ) -> Result<Vec<PlantDisease>, DomainError> {
        self.categories.list_by_parent_id(category_disease_id).await
    }

    pub async fn assign_plant_disease_to_category_disease(
        &self,
        category_disease_id: Uuid,
        plant_disease_id: Uuid,
    ) -> ServiceResponse<PlantDisease> {
        self.categories
            .assign(category_disease_id, plant_disease_id)
            .await
    }

    pub async fn unassign_plant_disease_to_category_disease(
        &self,
        category_disease_id: Uuid,
        plant_disease_id: Uuid,
    ) -> ServiceResponse<PlantDisease> {
        self.categories
            .unassign(category_disease_id, plant_disease_id)
            .await
    }

    pub async fn list_by_user_concept_id(
        &self,
        user_concept_id: Uuid,
    ) -> Result<Vec<PlantDisease>, DomainError> {
        self.user_concepts.list_by_parent_id(user_concept_id).await
    }

    pub async fn assign_plant_disease_to_user_concept(
        &self,
        user_concept_id: Uuid,
        plant_disease_id: Uuid,
    ) -> ServiceResponse<PlantDisease> {
        self.user_concepts
            .assign(user_concept_id, plant_disease_id)
            .await
    }

    pub async fn unassign_plant_disease_to_user_concept(
        &self,
        user_concept_id: Uuid,
        plant_disease_id: Uuid,
    ) -> ServiceResponse<PlantDisease> {
        self.user_concepts
            .unassign(user_concept_id, plant_disease_id)
            .await
    }
}
