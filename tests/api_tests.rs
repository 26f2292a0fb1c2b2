use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use ontologia::{build_router, Container, ContainerConfig};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

fn app() -> Router {
    let container = Container::new(ContainerConfig {
        data_dir: String::new(),
        memory_storage: true,
    })
    .expect("container");
    build_router(Arc::new(container))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request");

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    (status, bytes.to_vec())
}

fn json_body(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).expect("json body")
}

#[tokio::test]
async fn health_reports_ok() {
    let app = app();
    let (status, body) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_body(&body)["status"], "ok");
}

#[tokio::test]
async fn create_then_get_plant_disease() {
    let app = app();
    let (status, body) = send(
        &app,
        "POST",
        "/api/plantdiseases",
        Some(json!({ "plantDiseaseName": "Blight" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let created = json_body(&body);
    assert_eq!(created["plantDiseaseName"], "Blight");
    assert_eq!(created["isActive"], true);

    let id = created["id"].as_str().expect("id");
    let (status, body) = send(&app, "GET", &format!("/api/plantdiseases/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_body(&body)["id"], id);

    let (status, body) = send(&app, "GET", "/api/plantdiseases", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_body(&body).as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn missing_entity_is_a_plain_text_bad_request() {
    let app = app();
    let uri = format!("/api/categorydiseases/{}", Uuid::new_v4());
    let (status, body) = send(&app, "GET", &uri, None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(String::from_utf8_lossy(&body), "CategoryDisease Not Found");
}

#[tokio::test]
async fn invalid_payload_lists_validation_messages() {
    let app = app();
    let (status, body) = send(
        &app,
        "POST",
        "/api/users",
        Some(json!({ "userName": "", "email": "nobody" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let messages = json_body(&body);
    let messages = messages.as_array().expect("array");
    assert!(messages.contains(&json!("The UserName field is required.")));
    assert!(messages.contains(&json!("The Email field is not a valid e-mail address.")));
}

#[tokio::test]
async fn association_routes_assign_list_and_unassign() {
    let app = app();
    let (_, body) = send(
        &app,
        "POST",
        "/api/categorydiseases",
        Some(json!({ "categoryDiseaseName": "Fungal" })),
    )
    .await;
    let category_id = json_body(&body)["id"].as_str().expect("id").to_string();
    let (_, body) = send(
        &app,
        "POST",
        "/api/plantdiseases",
        Some(json!({ "plantDiseaseName": "Blight" })),
    )
    .await;
    let disease_id = json_body(&body)["id"].as_str().expect("id").to_string();

    let edge = format!(
        "/api/categorydiseases/{}/plantdiseases/{}",
        category_id, disease_id
    );
    let (status, body) = send(&app, "POST", &edge, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_body(&body)["plantDiseaseName"], "Blight");

    let listing = format!("/api/categorydiseases/{}/plantdiseases", category_id);
    let (status, body) = send(&app, "GET", &listing, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_body(&body).as_array().map(Vec::len), Some(1));

    let (status, _) = send(&app, "DELETE", &edge, None).await;
    assert_eq!(status, StatusCode::OK);
    let (_, body) = send(&app, "GET", &listing, None).await;
    assert_eq!(json_body(&body).as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn update_and_delete_user() {
    let app = app();
    let (_, body) = send(
        &app,
        "POST",
        "/api/users",
        Some(json!({ "userName": "ada", "email": "ada@example.com" })),
    )
    .await;
    let id = json_body(&body)["id"].as_str().expect("id").to_string();
    let uri = format!("/api/users/{}", id);

    let (status, body) = send(
        &app,
        "PUT",
        &uri,
        Some(json!({ "userName": "ada.l", "email": "ada@example.org" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let updated = json_body(&body);
    assert_eq!(updated["id"], id.as_str());
    assert_eq!(updated["userName"], "ada.l");

    let (status, _) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, body) = send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(String::from_utf8_lossy(&body), "User Not Found");
}
