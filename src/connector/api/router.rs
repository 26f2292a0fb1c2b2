use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use crate::domain::{CategoryDisease, ConceptType, PlantDisease, User, UserConcept};

use super::controller::{entity_controller, plant_disease_controller, user_concept_controller};
use super::Container;

/// Builds the HTTP surface: CRUD for the five entity families plus the
/// association routes.
pub fn build_router(container: Arc<Container>) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(entity_controller::routes::<User>())
        .merge(entity_controller::routes::<UserConcept>())
        .merge(entity_controller::routes::<ConceptType>())
        .merge(entity_controller::routes::<PlantDisease>())
        .merge(entity_controller::routes::<CategoryDisease>())
        .merge(user_concept_controller::routes())
        .merge(plant_disease_controller::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(container)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
