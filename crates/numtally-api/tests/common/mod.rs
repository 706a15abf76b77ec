//! Common test utilities for numtally-api integration tests.

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Method, Request, StatusCode};
use numtally_api::{ServerConfig, build_app};
use serde_json::Value;
use tower::ServiceExt;

/// A captured response.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
    pub text: String,
}

/// Test configuration: defaults, with rate limiting disabled.
pub fn test_config() -> ServerConfig {
    let mut config = ServerConfig::default();
    config.rate_limit.enabled = false;
    config
}

/// The full application built from `test_config()`.
pub fn test_app() -> Router {
    build_app(&test_config()).unwrap()
}

/// Send `req` through `app` and capture the response.
pub async fn send(app: Router, req: Request<Body>) -> TestResponse {
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let text = String::from_utf8_lossy(&bytes).into_owned();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    TestResponse {
        status,
        headers,
        body,
        text,
    }
}

/// `POST path` with a raw JSON body.
pub async fn post_raw(app: Router, path: &str, body: impl Into<Body>) -> TestResponse {
    let req = Request::builder()
        .method(Method::POST)
        .uri(path)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap();
    send(app, req).await
}

/// `POST path` with a JSON value.
pub async fn post_json(app: Router, path: &str, body: Value) -> TestResponse {
    post_raw(app, path, serde_json::to_vec(&body).unwrap()).await
}

/// `GET path`.
pub async fn get(app: Router, path: &str) -> TestResponse {
    let req = Request::builder()
        .method(Method::GET)
        .uri(path)
        .body(Body::empty())
        .unwrap();
    send(app, req).await
}
