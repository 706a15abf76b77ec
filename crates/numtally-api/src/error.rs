//! Error types for numtally-api.
//!
//! [`Error`] covers server setup (configuration, binding). [`ApiError`] is the
//! per-request outcome that renders as a JSON envelope; its public text never
//! carries internal detail.

use std::path::{Path, PathBuf};

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use numtally_core::envelope::{INTERNAL_SERVER_ERROR, SUM_TOO_LARGE};
use numtally_core::{NotFoundResponse, OverflowError, SumResponse, ValidationError};

/// Result type alias for numtally-api operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring or running the server.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Invalid or unreadable configuration.
    #[error("Configuration error: {message}")]
    Config {
        /// What is wrong.
        message: String,
    },

    /// I/O error, optionally tied to a file.
    #[error("I/O error{}: {source}", .path.as_ref().map(|p| format!(" at {}", p.display())).unwrap_or_default())]
    Io {
        /// Underlying error.
        #[source]
        source: std::io::Error,
        /// File involved, if any.
        path: Option<PathBuf>,
    },
}

impl Error {
    /// Creates a configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates an I/O error tied to `path`.
    pub fn io_with_path(source: std::io::Error, path: &Path) -> Self {
        Error::Io {
            source,
            path: Some(path.to_path_buf()),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source, path: None }
    }
}

/// Terminal state of a request that did not complete successfully.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ApiError {
    /// Input rejected by the validator (400).
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Running total left the safe-integer range (500).
    #[error(transparent)]
    Overflow(#[from] OverflowError),

    /// No route matched (404).
    #[error("no route for {path}")]
    NotFound {
        /// Original request path and query.
        path: String,
    },

    /// Anything else (500). The message is logged, never returned.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<numtally_core::Error> for ApiError {
    fn from(err: numtally_core::Error) -> Self {
        match err {
            numtally_core::Error::Validation(e) => ApiError::Validation(e),
            numtally_core::Error::Overflow(e) => ApiError::Overflow(e),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl ApiError {
    /// HTTP status for this outcome.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Overflow(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ApiError::Validation(err) => {
                tracing::warn!(details = ?err.details, "Sum request rejected");
                (status, Json(SumResponse::validation_failed(err))).into_response()
            }
            ApiError::Overflow(err) => {
                tracing::error!("Error calculating sum: {err}");
                (status, Json(SumResponse::failure(SUM_TOO_LARGE))).into_response()
            }
            ApiError::NotFound { path } => {
                tracing::debug!(path = %path, "No route matched");
                (status, Json(NotFoundResponse::new(path))).into_response()
            }
            ApiError::Internal(message) => {
                tracing::error!("Unhandled error: {message}");
                internal_error_response()
            }
        }
    }
}

/// The generic 500 envelope.
pub fn internal_error_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(SumResponse::failure(INTERNAL_SERVER_ERROR)),
    )
        .into_response()
}
