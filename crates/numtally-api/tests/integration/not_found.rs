//! Fallback for unmatched routes.

use axum::http::StatusCode;
use serde_json::json;

use crate::common::{get, post_json, test_app};

#[tokio::test]
async fn test_unknown_route() {
    let res = get(test_app(), "/api/unknown").await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(
        res.body,
        json!({
            "success": false,
            "error": "Endpoint not found",
            "path": "/api/unknown",
        })
    );
}

#[tokio::test]
async fn test_unknown_route_keeps_query() {
    let res = get(test_app(), "/missing?x=1&y=2").await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.body["path"], json!("/missing?x=1&y=2"));
}

#[tokio::test]
async fn test_wrong_method_is_not_found() {
    let res = get(test_app(), "/api/sum").await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.body["path"], json!("/api/sum"));

    let res = post_json(test_app(), "/health", json!({})).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
}
