//! CRUD endpoints shared by every entity family.

use axum::extract::{Path, State};
use axum::response::Response;
use axum::routing::get;
use axum::{Json, Router};
use uuid::Uuid;

use super::super::resources::ApiEntity;
use super::super::response::{envelope, listing, validation_failed, ApiError};
use super::AppState;

pub fn routes<E: ApiEntity>() -> Router<AppState> {
    Router::new()
        .route(
            &format!("/api/{}", E::ROUTE),
            get(list::<E>).post(create::<E>),
        )
        .route(
            &format!("/api/{}/{{id}}", E::ROUTE),
            get(get_by_id::<E>).put(update::<E>).delete(delete::<E>),
        )
}

pub async fn create<E: ApiEntity>(
    State(container): State<AppState>,
    Json(payload): Json<E::SaveResource>,
) -> Response {
    let entity = match E::from_save_resource(payload) {
        Ok(entity) => entity,
        Err(errors) => return validation_failed(errors),
    };
    envelope(container.entity_service::<E>().save(entity).await)
}

pub async fn list<E: ApiEntity>(
    State(container): State<AppState>,
) -> Result<Json<Vec<E::Resource>>, ApiError> {
    let entities = container.entity_service::<E>().list().await?;
    Ok(listing(entities))
}

pub async fn get_by_id<E: ApiEntity>(
    State(container): State<AppState>,
    Path(id): Path<Uuid>,
) -> Response {
    envelope(container.entity_service::<E>().get_by_id(id).await)
}

pub async fn update<E: ApiEntity>(
    State(container): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<E::SaveResource>,
) -> Response {
    let entity = match E::from_save_resource(payload) {
        Ok(entity) => entity,
        Err(errors) => return validation_failed(errors),
    };
    envelope(container.entity_service::<E>().update(id, entity).await)
}

pub async fn delete<E: ApiEntity>(
    State(container): State<AppState>,
    Path(id): Path<Uuid>,
) -> Response {
    envelope(container.entity_service::<E>().delete(id).await)
}
