//! Strict validation of untrusted `POST /api/sum` bodies.
//!
//! Rules are applied in order and the first failing rule wins, except that
//! element type checks report every offending element together:
//!
//! 1. the body is a JSON object
//! 2. `numbers` is present
//! 3. `numbers` is an array
//! 4. the array holds between [`MIN_NUMBERS`] and [`MAX_NUMBERS`] elements
//! 5. every element is a JSON number within the safe-integer magnitude
//! 6. no other top-level fields are present
//!
//! Numeric-looking strings are type errors; nothing is coerced.

use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::number::is_safe;
use crate::types::{MAX_NUMBERS, MIN_NUMBERS, ValidatedNumbers};

const FIELD: &str = "numbers";

/// Validate a raw request body.
///
/// An empty (or all-whitespace) body is treated as `{}`.
pub fn validate_body(body: &[u8]) -> Result<ValidatedNumbers, ValidationError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return validate(&Value::Object(Map::new()));
    }
    let value: Value = serde_json::from_slice(body)
        .map_err(|_| ValidationError::single("Request body must be valid JSON"))?;
    validate(&value)
}

/// Validate an already-parsed request body.
pub fn validate(body: &Value) -> Result<ValidatedNumbers, ValidationError> {
    let Value::Object(fields) = body else {
        return Err(ValidationError::single("Request body must be an object"));
    };

    let raw = match fields.get(FIELD) {
        None => return Err(ValidationError::single("Numbers array is required")),
        Some(Value::Array(items)) => items,
        Some(_) => return Err(ValidationError::single("Numbers must be an array")),
    };

    if raw.len() < MIN_NUMBERS {
        return Err(ValidationError::single(
            "Array must contain at least one number",
        ));
    }
    if raw.len() > MAX_NUMBERS {
        return Err(ValidationError::single(
            "Array can contain at most 1000 numbers",
        ));
    }

    let mut numbers = Vec::with_capacity(raw.len());
    let mut details = Vec::new();
    for (i, item) in raw.iter().enumerate() {
        match item.as_f64() {
            Some(n) if is_safe(n) => numbers.push(n),
            Some(_) => details.push(format!("\"{FIELD}[{i}]\" must be a safe number")),
            None => details.push(format!("\"{FIELD}[{i}]\" must be a number")),
        }
    }
    if !details.is_empty() {
        return Err(ValidationError::many(details));
    }

    let unknown: Vec<String> = fields
        .keys()
        .filter(|k| k.as_str() != FIELD)
        .map(|k| format!("\"{k}\" is not allowed"))
        .collect();
    if !unknown.is_empty() {
        return Err(ValidationError::many(unknown));
    }

    Ok(ValidatedNumbers::new_unchecked(numbers))
}
