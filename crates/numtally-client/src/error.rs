//! Error types for numtally-client.

use thiserror::Error;

/// Result type alias for numtally-client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Transport and protocol failures.
///
/// A request the server rejected with a JSON envelope is not an error; see
/// [`crate::NumtallyClient::calculate_sum`].
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The server could not be reached.
    #[error("Network error - please check your connection")]
    Network(#[source] reqwest::Error),

    /// The server did not answer within the configured timeout.
    #[error("Request timed out")]
    Timeout(#[source] reqwest::Error),

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    /// The server answered with a body that is not the expected document.
    #[error("Unexpected response (HTTP {status}): {body}")]
    UnexpectedResponse {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },
}

impl Error {
    /// Create an unexpected-response error.
    pub fn unexpected(status: u16, body: impl Into<String>) -> Self {
        Self::UnexpectedResponse {
            status,
            body: body.into(),
        }
    }

    /// Whether retrying later could succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Network(_) | Self::Timeout(_) => true,
            Self::UnexpectedResponse { status, .. } => *status == 429 || *status >= 500,
            Self::Build(_) => false,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err)
        } else if err.is_builder() {
            Self::Build(err)
        } else {
            Self::Network(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_display() {
        let err = Error::unexpected(429, "Too many requests");
        assert_eq!(
            err.to_string(),
            "Unexpected response (HTTP 429): Too many requests"
        );
        assert!(err.is_transient());
    }

    #[test]
    fn test_client_side_status_not_transient() {
        assert!(!Error::unexpected(404, "").is_transient());
        assert!(Error::unexpected(503, "").is_transient());
    }
}
