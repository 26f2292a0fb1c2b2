use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

use crate::domain::{DomainError, ServiceResponse};

use super::resources::ApiEntity;

/// Maps an envelope onto the wire: success is 200 with the resource,
/// failure is 400 with the message as a plain-text body.
pub fn envelope<E: ApiEntity>(response: ServiceResponse<E>) -> Response {
    match response {
        ServiceResponse::Success(entity) => {
            (StatusCode::OK, Json(entity.to_resource())).into_response()
        }
        ServiceResponse::Failure(message) => (StatusCode::BAD_REQUEST, message).into_response(),
    }
}

pub fn listing<E: ApiEntity>(entities: Vec<E>) -> Json<Vec<E::Resource>> {
    Json(entities.iter().map(E::to_resource).collect())
}

pub fn validation_failed(errors: Vec<String>) -> Response {
    (StatusCode::BAD_REQUEST, Json(errors)).into_response()
}

/// Read failures that the services let through.
#[derive(Debug)]
pub struct ApiError(DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if self.0.is_storage_error() {
            StatusCode::INTERNAL_SERVER_ERROR
        } else {
            StatusCode::BAD_REQUEST
        };
        error!("Request failed: {}", self.0);
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
