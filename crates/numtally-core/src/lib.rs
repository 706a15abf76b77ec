//! # numtally-core
//!
//! Core types and rules for the numtally summation service.
//!
//! This crate provides:
//! - [`validate`] / [`validate_body`]: strict validation of untrusted request bodies
//! - [`sum`]: overflow-checked summation of a [`ValidatedNumbers`] sequence
//! - [`SumResponse`] and friends: the JSON envelopes shared by server and client
//! - [`Counter`]: the clamped-at-zero counter reducer used by the client
//! - [`parse_numbers`]: lenient comma-separated free-text parsing for the client

#![warn(clippy::all)]

pub mod counter;
pub mod envelope;
pub mod error;
pub mod number;
pub mod parse;
pub mod sum;
pub mod types;
pub mod validate;

mod proptests;

pub use counter::{Counter, CounterAction};
pub use envelope::{HealthStatus, NotFoundResponse, SumResponse, timestamp_now};
pub use error::{Error, OverflowError, ParseError, Result, ValidationError};
pub use number::MAX_SAFE_INTEGER;
pub use parse::parse_numbers;
pub use sum::{checked_total, sum};
pub use types::{MAX_NUMBERS, MIN_NUMBERS, SumRequest, SumResult, ValidatedNumbers};
pub use validate::{validate, validate_body};

/// Run the full pipeline on a raw request body: validate, then sum.
pub fn compute(body: &[u8]) -> Result<SumResult> {
    let numbers = validate_body(body)?;
    Ok(sum(numbers)?)
}
