//! Error types for numtally-core.

/// Convenience `Result` type alias for the validate-then-sum pipeline.
pub type Result<T> = std::result::Result<T, Error>;

/// A request body failed validation.
///
/// Carries every message produced by the failing rule; for element type
/// errors that is one message per offending element.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Validation failed: {}", .details.join("; "))]
pub struct ValidationError {
    /// Human-readable messages, in the order they were detected.
    pub details: Vec<String>,
}

impl ValidationError {
    /// Creates a validation error with a single message.
    pub fn single<S: Into<String>>(message: S) -> Self {
        Self {
            details: vec![message.into()],
        }
    }

    /// Creates a validation error from a list of messages.
    pub fn many(details: Vec<String>) -> Self {
        Self { details }
    }
}

/// The running total left the safe-integer range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Sum exceeds safe integer range")]
pub struct OverflowError;

/// Client-side free-text parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ParseError {
    /// A token had no numeric prefix.
    #[error("\"{0}\" is not a valid number")]
    InvalidNumber(String),

    /// The input contained no tokens at all.
    #[error("Please enter at least one number")]
    Empty,
}

/// Errors produced by the validate-then-sum pipeline.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Malformed input or type mismatch.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Accumulated sum exceeded the safe-integer magnitude.
    #[error(transparent)]
    Overflow(#[from] OverflowError),
}

impl Error {
    /// Returns whether the caller can fix the request and resubmit.
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::Validation(_) => true,
            Error::Overflow(_) => false,
        }
    }
}
