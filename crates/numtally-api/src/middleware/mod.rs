//! Ingress middleware.
//!
//! Runtime order (outermost first):
//!
//! 1. Trace        - `http_request` span with status and latency
//! 2. CatchPanic   - a panicking handler becomes the generic 500 envelope
//! 3. Security     - security response headers
//! 4. RateLimit    - per-client allowance, 429 when exhausted
//! 5. CORS         - environment allow-list
//! 6. BodyLimit    - request body size cap
//! 7. Timeout      - 504 after `request_timeout_secs`
//! 8. Router

pub mod cors;
pub mod rate_limit;
pub mod security_headers;

use std::any::Any;
use std::time::Duration;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::{Request, StatusCode};
use axum::middleware::{from_fn, from_fn_with_state};
use axum::response::Response;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::field::Empty;

use crate::config::ServerConfig;
use crate::error::{Result, internal_error_response};

pub use rate_limit::ClientRateLimiter;

/// Wrap `router` in the full middleware stack.
///
/// # Errors
/// Returns a config error if the CORS or rate limit settings are unusable.
pub fn apply_middleware(mut router: Router, config: &ServerConfig) -> Result<Router> {
    // Layers are registered innermost first.

    // 7) Timeout
    router = router.layer(TimeoutLayer::with_status_code(
        StatusCode::GATEWAY_TIMEOUT,
        Duration::from_secs(config.request_timeout_secs),
    ));

    // 6) Body limit
    router = router.layer(RequestBodyLimitLayer::new(config.body_limit_bytes));
    router = router.layer(DefaultBodyLimit::max(config.body_limit_bytes));

    // 5) CORS
    if let Some(cors) = cors::build_cors_layer(config)? {
        router = router.layer(cors);
    }

    // 4) Rate limit
    if config.rate_limit.enabled {
        let limiter = ClientRateLimiter::from_config(&config.rate_limit)?;
        router = router.layer(from_fn_with_state(
            limiter,
            rate_limit::rate_limit_middleware,
        ));
    }

    // 3) Security headers
    router = router.layer(from_fn(security_headers::security_headers_middleware));

    // 2) Panics
    router = router.layer(CatchPanicLayer::custom(panic_response));

    // 1) Trace
    router = apply_trace_layer(router);

    Ok(router)
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(panic = %detail, "Unhandled error");
    internal_error_response()
}

fn apply_trace_layer(router: Router) -> Router {
    router.layer(
        TraceLayer::new_for_http()
            .make_span_with(|req: &Request<axum::body::Body>| {
                tracing::info_span!(
                    "http_request",
                    method = %req.method(),
                    uri = %req.uri().path(),
                    version = ?req.version(),
                    status = Empty,
                    latency_ms = Empty,
                )
            })
            .on_response(
                |res: &Response<axum::body::Body>, latency: Duration, span: &tracing::Span| {
                    span.record("status", res.status().as_u16());
                    span.record("latency_ms", latency.as_millis());
                    tracing::debug!(status = res.status().as_u16(), "Response sent");
                },
            ),
    )
}
