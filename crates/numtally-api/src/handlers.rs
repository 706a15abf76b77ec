//! Request handlers.
//!
//! `POST /api/sum` runs the two-stage pipeline:
//!
//! ```text
//! Received ──validate──▶ Validated ──sum──▶ Completed (200)
//!     │                      │
//!     └──▶ Rejected (400)    └──▶ Failed (500)
//! ```

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::Uri;
use numtally_core::{HealthStatus, SumResponse};

use crate::error::ApiError;
use crate::state::AppState;

/// `POST /api/sum`
///
/// The body is taken as raw bytes so that every malformed shape (missing,
/// non-JSON, wrong types) reaches the validator instead of an extractor
/// rejection.
pub async fn sum_numbers(body: Bytes) -> Result<Json<SumResponse>, ApiError> {
    let result = numtally_core::compute(&body)?;

    tracing::info!(
        count = result.count,
        sum = result.sum,
        "Sum calculated: {} numbers, result: {}",
        result.count,
        result.sum
    );

    Ok(Json(SumResponse::ok(result)))
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus::ok(state.uptime().as_secs_f64()))
}

/// Fallback for unmatched routes and unsupported methods.
pub async fn not_found(uri: Uri) -> ApiError {
    let path = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());
    ApiError::NotFound { path }
}
