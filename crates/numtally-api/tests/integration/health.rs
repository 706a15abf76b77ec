//! `GET /health`.

use axum::http::StatusCode;
use serde_json::json;

use crate::common::{get, test_app};

#[tokio::test]
async fn test_health_status() {
    let res = get(test_app(), "/health").await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["status"], json!("OK"));
    assert!(res.body["timestamp"].is_string());
    assert!(res.body["uptime"].is_number());
}

#[tokio::test]
async fn test_health_is_json() {
    let res = get(test_app(), "/health").await;
    let content_type = res.headers["content-type"].to_str().unwrap();
    assert!(content_type.starts_with("application/json"));
}

#[tokio::test]
async fn test_health_trailing_slash() {
    let res = get(test_app(), "/health/").await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["status"], json!("OK"));
}
