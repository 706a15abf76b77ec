//! Plain-text rendering of API results.

use std::fmt::Write;

use numtally_core::number::format_number;
use numtally_core::{HealthStatus, SumResponse};

/// `Error: <message>` on its own line.
pub fn error_line(message: &str) -> String {
    format!("Error: {message}\n")
}

/// A sum result, or the error and its details.
pub fn sum_response(response: &SumResponse) -> String {
    let mut out = String::new();
    match (&response.data, response.success) {
        (Some(data), true) => {
            let numbers: Vec<String> = data
                .numbers
                .as_slice()
                .iter()
                .map(|n| format_number(*n))
                .collect();
            let _ = writeln!(out, "Sum: {}", format_number(data.sum));
            let _ = writeln!(out, "Count: {} numbers", data.count);
            let _ = writeln!(out, "Numbers: {}", numbers.join(", "));
        }
        _ => {
            out.push_str(&error_line(
                response.error.as_deref().unwrap_or("Unknown error"),
            ));
            for detail in response.details.iter().flatten() {
                let _ = writeln!(out, "  - {detail}");
            }
        }
    }
    out
}

/// Health status and uptime.
pub fn health(status: &HealthStatus) -> String {
    format!(
        "Status: {}\nUptime: {:.1}s\nTimestamp: {}\n",
        status.status, status.uptime, status.timestamp
    )
}

/// One counter line, e.g. `increment -> 3`.
pub fn counter_step(label: &str, value: u64) -> String {
    format!("{label} -> {value}\n")
}
