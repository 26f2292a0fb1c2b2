//! Edges from user concepts to users and concept types.

use axum::extract::{Path, State};
use axum::response::Response;
use axum::routing::{get, post};
use axum::{Json, Router};
use uuid::Uuid;

use crate::connector::api::resources::UserConceptResource;
use crate::connector::api::response::{envelope, listing, ApiError};

use super::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/users/{id}/userconcepts", get(list_by_user_id))
        .route(
            "/api/users/{id}/userconcepts/{child_id}",
            post(assign_to_user).delete(unassign_from_user),
        )
        .route(
            "/api/concepttypes/{id}/userconcepts",
            get(list_by_concept_type_id),
        )
        .route(
            "/api/concepttypes/{id}/userconcepts/{child_id}",
            post(assign_to_concept_type).delete(unassign_from_concept_type),
        )
}

async fn list_by_user_id(
    State(container): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<UserConceptResource>>, ApiError> {
    let concepts = container
        .user_concept_service()
        .list_by_user_id(user_id)
        .await?;
    Ok(listing(concepts))
}

async fn assign_to_user(
    State(container): State<AppState>,
    Path((user_id, user_concept_id)): Path<(Uuid, Uuid)>,
) -> Response {
    envelope(
        container
            .user_concept_service()
            .assign_user_concept_to_user(user_id, user_concept_id)
            .await,
    )
}

async fn unassign_from_user(
    State(container): State<AppState>,
    Path((user_id, user_concept_id)): Path<(Uuid, Uuid)>,
) -> Response {
    envelope(
        container
            .user_concept_service()
            .unassign_user_concept_to_user(user_id, user_concept_id)
            .await,
    )
}

async fn list_by_concept_type_id(
    State(container): State<AppState>,
    Path(concept_type_id): Path<Uuid>,
) -> Result<Json<Vec<UserConceptResource>>, ApiError> {
    let concepts = container
        .user_concept_service()
        .list_by_concept_type_id(concept_type_id)
        .await?;
    Ok(listing(concepts))
}

async fn assign_to_concept_type(
    State(container): State<AppState>,
    Path((concept_type_id, user_concept_id)): Path<(Uuid, Uuid)>,
) -> Response {
    envelope(
        container
            .user_concept_service()
            .assign_user_concept_to_concept_type(concept_type_id, user_concept_id)
            .await,
    )
}

async fn unassign_from_concept_type(
    State(container): State<AppState>,
    Path((concept_type_id, user_concept_id)): Path<(Uuid, Uuid)>,
) -> Response {
    envelope(
        container
            .user_concept_service()
            .unassign_user_concept_to_concept_type(concept_type_id, user_concept_id)
            .await,
    )
}
