//! Integration tests for the HTTP surface
//!
//! These tests drive the router directly and verify:
//! - Health reporting
//! - Documentation metadata and renderings
//! - Not-found mapping for unknown documents and routes
//! - Request id and CORS headers

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::util::ServiceExt; // for `oneshot`

use cart_service::router::{create_app_router, REQUEST_ID_HEADER};
use cart_service::state::AppState;

/// Helper function to create a test app instance
fn create_test_app() -> axum::Router {
    let state = Arc::new(AppState::default());
    create_app_router(state)
}

/// Helper function to send a GET request and get the raw response
async fn get(app: &axum::Router, uri: &str) -> axum::response::Response {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    app.clone().oneshot(request).await.unwrap()
}

/// Helper function to send a GET request and decode a JSON body
async fn get_json(app: &axum::Router, uri: &str) -> (StatusCode, Value) {
    let response = get(app, uri).await;
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(json!({}));

    (status, body)
}

#[tokio::test]
async fn test_health() {
    let app = create_test_app();

    let response = get(&app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["cache-control"], "no-store");

    let (status, body) = get_json(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "running");
    assert_eq!(body["service"], "Cart Restful Web Service");
    assert_eq!(body["version"], "v1");
}

#[tokio::test]
async fn test_metadata_endpoint() {
    let app = create_test_app();

    let (status, body) = get_json(&app, "/api-docs/metadata").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "title": "Cart Restful Web Service",
            "version": "v1",
            "description": "Cart Restful Web Service documentation"
        })
    );
}

#[tokio::test]
async fn test_openapi_json_document() {
    let app = create_test_app();

    let response = get(&app, "/api-docs/openapi.json").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["content-type"], "application/json");

    let (_, body) = get_json(&app, "/api-docs/openapi.json").await;
    assert_eq!(body["info"]["title"], "Cart Restful Web Service");
    assert_eq!(body["info"]["version"], "v1");
    assert_eq!(
        body["info"]["description"],
        "Cart Restful Web Service documentation"
    );
    assert!(body["paths"]["/health"]["get"].is_object());
}

#[tokio::test]
async fn test_openapi_yaml_document() {
    let app = create_test_app();

    let response = get(&app, "/api-docs/openapi.yaml").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["content-type"], "application/yaml");

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let text = String::from_utf8(body_bytes.to_vec()).unwrap();
    assert!(text.contains("Cart Restful Web Service documentation"));
}

#[tokio::test]
async fn test_unknown_document_is_not_found() {
    let app = create_test_app();

    let (status, body) = get_json(&app, "/api-docs/swagger.xml").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
    assert_eq!(body["message"], "api document 'swagger.xml' not found");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = create_test_app();

    let (status, body) = get_json(&app, "/carts/42").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
    assert_eq!(body["message"], "no route for /carts/42");
}

#[tokio::test]
async fn test_request_id_header() {
    let app = create_test_app();

    let first = get(&app, "/health").await;
    let second = get(&app, "/nope").await;

    let first_id = first.headers()[REQUEST_ID_HEADER].to_str().unwrap().to_string();
    let second_id = second.headers()[REQUEST_ID_HEADER].to_str().unwrap().to_string();
    assert_eq!(first_id.len(), 32);
    assert_ne!(first_id, second_id);
}

#[tokio::test]
async fn test_cors_headers() {
    let app = create_test_app();

    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .header("origin", "http://example.com")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.headers()["access-control-allow-origin"], "*");
}
