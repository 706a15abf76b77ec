//! Lenient free-text parsing used by clients before calling the endpoint.
//!
//! Splits on commas, trims each token, drops empty tokens, and reads the
//! longest numeric prefix of each token (`"3abc"` is 3). The server never
//! relies on this; it validates strictly on its own.

use crate::error::ParseError;

/// Parse `"1, 2, 3.5, -2"` into numbers.
pub fn parse_numbers(input: &str) -> Result<Vec<f64>, ParseError> {
    let numbers = input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| parse_prefix(t).ok_or_else(|| ParseError::InvalidNumber(t.to_string())))
        .collect::<Result<Vec<_>, _>>()?;

    if numbers.is_empty() {
        return Err(ParseError::Empty);
    }
    Ok(numbers)
}

/// Longest prefix of `token` that reads as a finite decimal float.
fn parse_prefix(token: &str) -> Option<f64> {
    let bytes = token.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end.min(bytes.len())..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    token[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
