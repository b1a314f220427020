//! Router-level behaviour: health, fallback, malformed bodies, CORS

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use pretty_assertions::assert_eq;
use serde_json::json;
use tower::ServiceExt;

use forum_live::shared::AppConfig;

use crate::assert_error_body;
use crate::common::TestApp;

const INDEX_HTML: &str = "<!doctype html><title>forum</title>";

/// GET a path and return the status with the raw body text
async fn get_text(app: &TestApp, uri: &str) -> (StatusCode, String) {
    let request = Request::get(uri).body(Body::empty()).unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn test_health_reports_subscribers() {
    let app = TestApp::new();

    let (status, body) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok", "subscribers": 0 }));

    let _subscription = app.state.live.subscribe();
    let (_, body) = app.get("/health").await;
    assert_eq!(body["subscribers"], 1);
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let app = TestApp::new();
    let (status, body) = app.get("/api/nowhere").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error_body!(body, 404);
}

#[tokio::test]
async fn test_malformed_json_body() {
    let app = TestApp::new();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/questions")
        .header("content-type", "application/json")
        .body(Body::from("{\"title\": "))
        .unwrap();

    let (status, body) = app.send(request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_body!(body, 400);
}

#[tokio::test]
async fn test_static_routes_win_over_id_capture() {
    let app = TestApp::new();
    app.create_question("Q", "D", None).await;

    let (status, body) = app.get("/api/questions/recent").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_array());
}

#[tokio::test]
async fn test_cors_preflight() {
    let app = TestApp::new();
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/questions")
        .header("origin", "http://localhost:5173")
        .header("access-control-request-method", "POST")
        .body(Body::empty())
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();
    assert!(response.headers().contains_key("access-control-allow-origin"));
}

#[tokio::test]
async fn test_static_dir_serves_frontend() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), INDEX_HTML).unwrap();
    std::fs::write(dir.path().join("app.js"), "console.log('forum');").unwrap();

    let config = AppConfig::builder()
        .static_dir(dir.path())
        .build()
        .unwrap();
    let app = TestApp::with_config(config);

    let (status, body) = get_text(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, INDEX_HTML);

    let (status, body) = get_text(&app, "/app.js").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "console.log('forum');");

    let (status, _) = get_text(&app, "/missing.css").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_api_routes_win_over_static_dir() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), INDEX_HTML).unwrap();

    let config = AppConfig::builder()
        .static_dir(dir.path())
        .build()
        .unwrap();
    let app = TestApp::with_config(config);
    let question = app.create_question("Static", "and dynamic", None).await;

    let (status, body) = app.get("/api/questions").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["id"], question);

    let (status, body) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
