//! Bounded counter reducer.
//!
//! The counter lives entirely on the client. Its value never drops below
//! zero; there is no upper bound beyond the integer width.

use std::fmt;
use std::str::FromStr;

/// An action applied to a [`Counter`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterAction {
    /// `n → n + 1`
    Increment,
    /// `n → max(0, n − 1)`
    Decrement,
    /// `n → initial`
    Reset,
    /// `n → max(0, v)`
    Set(i64),
}

impl FromStr for CounterAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "inc" | "increment" | "+" => Ok(Self::Increment),
            "dec" | "decrement" | "-" => Ok(Self::Decrement),
            "reset" => Ok(Self::Reset),
            other => match other.strip_prefix("set=") {
                Some(v) => v
                    .parse::<i64>()
                    .map(Self::Set)
                    .map_err(|_| format!("invalid counter value: '{v}'")),
                None => Err(format!(
                    "unknown counter action '{s}' (expected inc, dec, reset, or set=N)"
                )),
            },
        }
    }
}

impl fmt::Display for CounterAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Increment => write!(f, "increment"),
            Self::Decrement => write!(f, "decrement"),
            Self::Reset => write!(f, "reset"),
            Self::Set(v) => write!(f, "set({v})"),
        }
    }
}

/// Counter state with the value it resets to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Counter {
    value: u64,
    initial: u64,
}

impl Counter {
    /// A counter starting (and resetting) at `initial`.
    pub fn new(initial: u64) -> Self {
        Self {
            value: initial,
            initial,
        }
    }

    /// Current value.
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Pure reducer: the counter after `action`.
    #[must_use]
    pub fn reduce(self, action: CounterAction) -> Self {
        let value = match action {
            CounterAction::Increment => self.value.saturating_add(1),
            CounterAction::Decrement => self.value.saturating_sub(1),
            CounterAction::Reset => self.initial,
            CounterAction::Set(v) => u64::try_from(v).unwrap_or(0),
        };
        Self { value, ..self }
    }

    /// Apply `action` in place and return the new value.
    pub fn apply(&mut self, action: CounterAction) -> u64 {
        *self = self.reduce(action);
        self.value
    }
}

impl Default for Counter {
    fn default() -> Self {
        Self::new(0)
    }
}
