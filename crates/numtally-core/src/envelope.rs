//! JSON envelopes exchanged between the server and its clients.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::types::SumResult;

/// `error` text for rejected input.
pub const VALIDATION_FAILED: &str = "Validation failed";
/// `error` text when the running total overflows.
pub const SUM_TOO_LARGE: &str = "Sum too large to calculate safely";
/// `error` text for anything unanticipated.
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";
/// `error` text for unmatched routes.
pub const ENDPOINT_NOT_FOUND: &str = "Endpoint not found";

/// Current UTC time as RFC 3339 with millisecond precision, e.g.
/// `2026-10-19T08:30:00.123Z`.
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Response envelope for `POST /api/sum`.
///
/// `data` is present iff `success`; `error` is present iff `!success`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SumResponse {
    /// Whether the sum was computed.
    pub success: bool,
    /// The result on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<SumResult>,
    /// Failure summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Individual validation messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
    /// Response time; omitted on validation failures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl SumResponse {
    /// A successful result.
    pub fn ok(data: SumResult) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            details: None,
            timestamp: Some(timestamp_now()),
        }
    }

    /// A 400 validation failure.
    pub fn validation_failed(err: ValidationError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(VALIDATION_FAILED.to_string()),
            details: Some(err.details),
            timestamp: None,
        }
    }

    /// A failure with a fixed public message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
            details: None,
            timestamp: Some(timestamp_now()),
        }
    }
}

/// Body of `GET /health`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Always `"OK"` when the server answers.
    pub status: String,
    /// Response time.
    pub timestamp: String,
    /// Seconds since the server started.
    pub uptime: f64,
}

impl HealthStatus {
    /// A healthy status with the given uptime.
    pub fn ok(uptime_secs: f64) -> Self {
        Self {
            status: "OK".to_string(),
            timestamp: timestamp_now(),
            uptime: uptime_secs,
        }
    }
}

/// Body of the 404 fallback.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NotFoundResponse {
    /// Always `false`.
    pub success: bool,
    /// Always [`ENDPOINT_NOT_FOUND`].
    pub error: String,
    /// The original request path, including any query string.
    pub path: String,
}

impl NotFoundResponse {
    /// A 404 body for `path`.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            success: false,
            error: ENDPOINT_NOT_FOUND.to_string(),
            path: path.into(),
        }
    }
}
