use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response, StatusCode},
};
use ml_service::{
    config::AppSettings,
    server::{self, handlers::AppState},
};
use serde_json::Value;
use std::collections::BTreeSet;
use tower::ServiceExt; // for `oneshot`

/// Create the application router with default settings and a fixed hostname
pub fn create_test_app() -> Router {
    create_test_app_with(AppSettings::default())
}

pub fn create_test_app_with(settings: AppSettings) -> Router {
    server::router(AppState::with_hostname(settings, "test-host"))
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Send a GET request and return status plus parsed JSON body
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app.oneshot(get_request(uri)).await.unwrap();
    read_json(response).await
}

pub async fn read_json(response: Response<Body>) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

pub fn keys_of(body: &Value) -> BTreeSet<String> {
    body.as_object()
        .expect("response body should be a JSON object")
        .keys()
        .cloned()
        .collect()
}

pub fn key_set(keys: &[&str]) -> BTreeSet<String> {
    keys.iter().map(|k| k.to_string()).collect()
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 8080
  logs:
    level: "debug"

app:
  environment: "production"
  registry: "registry.example.com:5000"
  namespace: "ml-prod"
"#;

/// Invalid configuration YAML for testing error cases
pub const INVALID_CONFIG_YAML: &str = r#"
server:
  port: "not-a-number"
"#;
