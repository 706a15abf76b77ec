//! Request and result types.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::number::{is_safe, serialize_number, serialize_numbers};

/// Minimum number of elements accepted by the sum endpoint.
pub const MIN_NUMBERS: usize = 1;

/// Maximum number of elements accepted by the sum endpoint.
pub const MAX_NUMBERS: usize = 1000;

/// Body of `POST /api/sum` as sent by a well-behaved client.
///
/// The server never deserializes into this type; it validates the raw
/// JSON instead so that malformed bodies produce structured messages.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SumRequest {
    /// Numbers to add.
    #[serde(serialize_with = "serialize_numbers")]
    pub numbers: Vec<f64>,
}

impl SumRequest {
    /// Creates a request for the given numbers.
    pub fn new(numbers: impl Into<Vec<f64>>) -> Self {
        Self {
            numbers: numbers.into(),
        }
    }
}

/// An ordered sequence of 1..=1000 finite numbers that passed validation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>")]
pub struct ValidatedNumbers(#[serde(serialize_with = "serialize_numbers")] Vec<f64>);

impl ValidatedNumbers {
    pub(crate) fn new_unchecked(values: Vec<f64>) -> Self {
        Self(values)
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the numbers in input order.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Take the numbers back out.
    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl TryFrom<Vec<f64>> for ValidatedNumbers {
    type Error = ValidationError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        if values.len() < MIN_NUMBERS {
            return Err(ValidationError::single(
                "Array must contain at least one number",
            ));
        }
        if values.len() > MAX_NUMBERS {
            return Err(ValidationError::single(
                "Array can contain at most 1000 numbers",
            ));
        }
        let details: Vec<String> = values
            .iter()
            .enumerate()
            .filter(|(_, v)| !is_safe(**v))
            .map(|(i, _)| format!("\"numbers[{i}]\" must be a safe number"))
            .collect();
        if !details.is_empty() {
            return Err(ValidationError::many(details));
        }
        Ok(Self(values))
    }
}

impl AsRef<[f64]> for ValidatedNumbers {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

/// Outcome of a successful summation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SumResult {
    /// Arithmetic sum of `numbers`.
    #[serde(serialize_with = "serialize_number")]
    pub sum: f64,
    /// Always equal to `numbers.len()`.
    pub count: usize,
    /// The input, in original order.
    pub numbers: ValidatedNumbers,
}
