//! Edges from plant diseases to category diseases and user concepts.

use axum::extract::{Path, State};
use axum::response::Response;
use axum::routing::{get, post};
use axum::{Json, Router};
use uuid::Uuid;

use crate::connector::api::resources::PlantDiseaseResource;
use crate::connector::api::response::{envelope, listing, ApiError};

use super::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/categorydiseases/{id}/plantdiseases",
            get(list_by_category_disease_id),
        )
        .route(
            "/api/categorydiseases/{id}/plantdiseases/{child_id}",
            post(assign_to_category_disease).delete(unassign_from_category_disease),
        )
        .route(
            "/api/userconcepts/{id}/plantdiseases",
            get(list_by_user_concept_id),
        )
        .route(
            "/api/userconcepts/{id}/plantdiseases/{child_id}",
            post(assign_to_user_concept).delete(unassign_from_user_concept),
        )
}

async fn list_by_category_disease_id(
    State(container): State<AppState>,
    Path(category_disease_id): Path<Uuid>,
) -> Result<Json<Vec<PlantDiseaseResource>>, ApiError> {
    let diseases = container
        .plant_disease_service()
        .list_by_category_disease_id(category_disease_id)
        .await?;
    Ok(listing(diseases))
}

async fn assign_to_category_disease(
    State(container): State<AppState>,
    Path((category_disease_id, plant_disease_id)): Path<(Uuid, Uuid)>,
) -> Response {
    envelope(
        container
            .plant_disease_service()
            .assign_plant_disease_to_category_disease(category_disease_id, plant_disease_id)
            .await,
    )
}

async fn unassign_from_category_disease(
    State(container): State<AppState>,
    Path((category_disease_id, plant_disease_id)): Path<(Uuid, Uuid)>,
) -> Response {
    envelope(
        container
            .plant_disease_service()
            .unassign_plant_disease_to_category_disease(category_disease_id, plant_disease_id)
            .await,
    )
}

async fn list_by_user_concept_id(
    State(container): State<AppState>,
    Path(user_concept_id): Path<Uuid>,
) -> Result<Json<Vec<PlantDiseaseResource>>, ApiError> {
    let diseases = container
        .plant_disease_service()
        .list_by_user_concept_id(user_concept_id)
        .await?;
    Ok(listing(diseases))
}

async fn assign_to_user_concept(
    State(container): State<AppState>,
    Path((user_concept_id, plant_disease_id)): Path<(Uuid, Uuid)>,
) -> Response {
    envelope(
        container
            .plant_disease_service()
            .assign_plant_disease_to_user_concept(user_concept_id, plant_disease_id)
            .await,
    )
}

async fn unassign_from_user_concept(
    State(container): State<AppState>,
    Path((user_concept_id, plant_disease_id)): Path<(Uuid, Uuid)>,
) -> Response {
    envelope(
        container
            .plant_disease_service()
            .unassign_plant_disease_to_user_concept(user_concept_id, plant_disease_id)
            .await,
    )
}
