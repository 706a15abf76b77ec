//! Numeric helpers shared by validation, summation and serialization.

use serde::Serializer;
use serde::ser::SerializeSeq;

/// Largest integer magnitude exactly representable in an IEEE-754 double (2^53 − 1).
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Returns `true` if `value` is finite and its magnitude does not exceed [`MAX_SAFE_INTEGER`].
pub fn is_safe(value: f64) -> bool {
    value.is_finite() && value.abs() <= MAX_SAFE_INTEGER
}

/// Serialize a number the way a JSON-native client expects: integral values
/// inside the safe range go out as integers (`15`, not `15.0`).
pub fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && is_safe(*value) {
        // Exact: magnitude is below 2^53.
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// Sequence form of [`serialize_number`].
pub fn serialize_numbers<S: Serializer>(values: &[f64], serializer: S) -> Result<S::Ok, S::Error> {
    let mut seq = serializer.serialize_seq(Some(values.len()))?;
    for value in values {
        seq.serialize_element(&JsonNumber(*value))?;
    }
    seq.end()
}

struct JsonNumber(f64);

impl serde::Serialize for JsonNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_number(&self.0, serializer)
    }
}

/// Render a number for display (`6`, `3.5`, `-2`).
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && is_safe(value) {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
