//! Overflow-checked summation.

use crate::error::OverflowError;
use crate::number::MAX_SAFE_INTEGER;
use crate::types::{SumResult, ValidatedNumbers};

/// Fold `values` left to right, failing as soon as the running total's
/// magnitude exceeds [`MAX_SAFE_INTEGER`].
///
/// The check runs after every addition, so an intermediate excursion is an
/// overflow even when later elements would bring the total back in range.
pub fn checked_total(values: &[f64]) -> Result<f64, OverflowError> {
    values.iter().try_fold(0.0_f64, |acc, n| {
        let total = acc + n;
        if total.abs() > MAX_SAFE_INTEGER {
            Err(OverflowError)
        } else {
            Ok(total)
        }
    })
}

/// Sum a validated sequence.
pub fn sum(numbers: ValidatedNumbers) -> Result<SumResult, OverflowError> {
    let total = checked_total(numbers.as_slice())?;
    Ok(SumResult {
        sum: total,
        count: numbers.len(),
        numbers,
    })
}
