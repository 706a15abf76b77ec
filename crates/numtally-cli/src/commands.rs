//! Command implementations.
//!
//! Each command produces an [`Outcome`]; failures the user should see
//! (bad input, server rejections, unreachable server) are rendered into the
//! output rather than propagated.

use numtally_client::NumtallyClient;
use numtally_core::{Counter, CounterAction, parse_numbers};

use crate::render;

/// What to print and how to exit.
#[derive(Debug, PartialEq, Eq)]
pub struct Outcome {
    pub output: String,
    pub success: bool,
}

impl Outcome {
    fn ok(output: String) -> Self {
        Self {
            output,
            success: true,
        }
    }

    fn failed(output: String) -> Self {
        Self {
            output,
            success: false,
        }
    }
}

/// Parse `input` locally, then ask the server for the sum.
pub async fn sum(client: &NumtallyClient, input: &str) -> Outcome {
    let numbers = match parse_numbers(input) {
        Ok(numbers) => numbers,
        Err(e) => return Outcome::failed(render::error_line(&e.to_string())),
    };

    match client.calculate_sum(&numbers).await {
        Ok(response) if response.success => Outcome::ok(render::sum_response(&response)),
        Ok(response) => Outcome::failed(render::sum_response(&response)),
        Err(e) => {
            tracing::debug!("Sum request failed: {e:?}");
            Outcome::failed(render::error_line(&e.to_string()))
        }
    }
}

/// Report server health.
pub async fn health(client: &NumtallyClient) -> Outcome {
    match client.health_check().await {
        Ok(status) => Outcome::ok(render::health(&status)),
        Err(e) => {
            tracing::debug!("Health check failed: {e:?}");
            Outcome::failed(render::error_line(&e.to_string()))
        }
    }
}

/// Run `actions` against a counter starting at `initial`.
pub fn counter(initial: u64, actions: &[CounterAction]) -> Outcome {
    let mut counter = Counter::new(initial);
    let mut output = render::counter_step("start", counter.value());
    for action in actions {
        let value = counter.apply(*action);
        output.push_str(&render::counter_step(&action.to_string(), value));
    }
    Outcome::ok(output)
}
