//! In-process app helpers
//!
//! `TestApp` drives the router through `tower::ServiceExt::oneshot`, and
//! `spawn_server` binds a real listener for WebSocket tests.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use forum_live::backend::routes::create_router;
use forum_live::backend::server::AppState;
use forum_live::backend::store::{ForumStore, MemoryStore};
use forum_live::shared::AppConfig;

/// Router plus a handle on the state behind it
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

impl TestApp {
    /// Empty in-memory forum
    pub fn new() -> Self {
        Self::with_store(Arc::new(MemoryStore::new()))
    }

    pub fn with_store(store: Arc<dyn ForumStore>) -> Self {
        Self::build(store, AppConfig::default())
    }

    /// Empty in-memory forum with a custom configuration
    pub fn with_config(config: AppConfig) -> Self {
        Self::build(Arc::new(MemoryStore::new()), config)
    }

    fn build(store: Arc<dyn ForumStore>, config: AppConfig) -> Self {
        let state = AppState::new(store, config);
        let router = create_router(state.clone());
        Self { router, state }
    }

    /// Send a request and decode the JSON body (`Value::Null` when empty)
    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header("content-type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        self.send(builder.body(body).unwrap()).await
    }

    /// Send a prepared request and decode the JSON body
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::PUT, uri, None).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::DELETE, uri, None).await
    }

    /// Create a question and return its id
    pub async fn create_question(&self, title: &str, description: &str, tags: Option<&str>) -> i64 {
        let (status, body) = self
            .post(
                "/api/questions",
                serde_json::json!({ "title": title, "description": description, "tags": tags }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "create question failed: {}", body);
        body["id"].as_i64().unwrap()
    }

    /// Create an answer and return its id
    pub async fn create_answer(&self, question_id: i64, text: &str) -> i64 {
        let (status, body) = self
            .post(
                &format!("/api/questions/{}/answers", question_id),
                serde_json::json!({ "answer_text": text }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "create answer failed: {}", body);
        body["id"].as_i64().unwrap()
    }
}

/// Serve the app on an ephemeral local port
///
/// Returns the bound address and the state so tests can inspect the registry.
pub async fn spawn_server() -> (SocketAddr, AppState) {
    let state = AppState::new(Arc::new(MemoryStore::new()), AppConfig::default());
    let app = create_router(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (addr, state)
}
