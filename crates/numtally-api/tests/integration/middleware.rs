//! Ingress middleware observed through the full application.

use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::routing::get as get_route;
use numtally_api::Environment;
use numtally_api::middleware::apply_middleware;
use numtally_api::middleware::rate_limit::RATE_LIMIT_MESSAGE;
use serde_json::json;

use crate::common::{TestResponse, get, post_json, send, test_app, test_config};

async fn preflight(app: Router, origin: &str) -> TestResponse {
    let req = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/sum")
        .header("origin", origin)
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .body(Body::empty())
        .unwrap();
    send(app, req).await
}

#[tokio::test]
async fn test_security_headers_on_every_response() {
    for res in [
        get(test_app(), "/health").await,
        get(test_app(), "/nowhere").await,
        post_json(test_app(), "/api/sum", json!({ "numbers": [] })).await,
    ] {
        assert_eq!(res.headers["x-content-type-options"], "nosniff");
        assert_eq!(res.headers["x-frame-options"], "SAMEORIGIN");
        assert_eq!(res.headers["referrer-policy"], "no-referrer");
        assert_eq!(res.headers["x-dns-prefetch-control"], "off");
        assert_eq!(res.headers["cross-origin-opener-policy"], "same-origin");
        assert_eq!(res.headers["cross-origin-resource-policy"], "same-origin");
        assert!(res.headers.contains_key("strict-transport-security"));
        assert!(res.headers.contains_key("content-security-policy"));
    }
}

#[tokio::test]
async fn test_rate_limit_exhausted() {
    let mut config = test_config();
    config.rate_limit.enabled = true;
    config.rate_limit.max_requests = 2;
    let app = numtally_api::build_app(&config).unwrap();

    for _ in 0..2 {
        let res = get(app.clone(), "/health").await;
        assert_eq!(res.status, StatusCode::OK);
        assert_eq!(res.headers["x-ratelimit-limit"], "2");
    }

    let res = get(app, "/health").await;
    assert_eq!(res.status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(res.text, RATE_LIMIT_MESSAGE);
    let retry_after: u64 = res.headers["retry-after"].to_str().unwrap().parse().unwrap();
    assert!(retry_after >= 1);
    assert_eq!(res.headers["x-content-type-options"], "nosniff");
}

#[tokio::test]
async fn test_cors_development_origin_allowed() {
    let res = preflight(test_app(), "http://localhost:5173").await;
    assert!(res.status.is_success());
    assert_eq!(
        res.headers["access-control-allow-origin"],
        "http://localhost:5173"
    );
    assert_eq!(res.headers["access-control-allow-credentials"], "true");
}

#[tokio::test]
async fn test_cors_unknown_origin_not_allowed() {
    let res = preflight(test_app(), "https://evil.example").await;
    assert!(!res.headers.contains_key("access-control-allow-origin"));
}

#[tokio::test]
async fn test_cors_production_origin() {
    let mut config = test_config();
    config.environment = Environment::Production;
    let app = numtally_api::build_app(&config).unwrap();

    let res = preflight(app.clone(), "https://yourdomain.com").await;
    assert_eq!(
        res.headers["access-control-allow-origin"],
        "https://yourdomain.com"
    );

    let res = preflight(app, "http://localhost:3000").await;
    assert!(!res.headers.contains_key("access-control-allow-origin"));
}

#[tokio::test]
async fn test_body_limit() {
    let mut config = test_config();
    config.body_limit_bytes = 64;
    let app = numtally_api::build_app(&config).unwrap();

    let numbers = vec![1; 100];
    let res = post_json(app, "/api/sum", json!({ "numbers": numbers })).await;
    assert_eq!(res.status, StatusCode::PAYLOAD_TOO_LARGE);
}

#[allow(clippy::panic)]
async fn explode() -> &'static str {
    panic!("boom")
}

#[tokio::test]
async fn test_panic_becomes_internal_error() {
    let router = Router::new().route("/panic", get_route(explode));
    let app = apply_middleware(router, &test_config()).unwrap();

    let res = get(app, "/panic").await;
    assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(res.body["success"], json!(false));
    assert_eq!(res.body["error"], json!("Internal server error"));
    assert!(res.body["timestamp"].is_string());
    assert!(!res.text.contains("boom"));
}

async fn stall() -> &'static str {
    tokio::time::sleep(Duration::from_secs(5)).await;
    "late"
}

#[tokio::test]
async fn test_slow_handler_times_out() {
    let mut config = test_config();
    config.request_timeout_secs = 1;
    let router = Router::new().route("/slow", get_route(stall));
    let app = apply_middleware(router, &config).unwrap();

    let res = get(app, "/slow").await;
    assert_eq!(res.status, StatusCode::GATEWAY_TIMEOUT);
    assert!(!res.text.contains("late"));
}
