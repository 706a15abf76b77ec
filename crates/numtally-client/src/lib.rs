//! # numtally-client
//!
//! Async client for the numtally API.
//!
//! - [`NumtallyClient::calculate_sum`] posts numbers to `/api/sum`
//! - [`NumtallyClient::health_check`] reads `/health`
//!
//! Rejections from the server (validation, overflow) come back as the
//! server's envelope rather than as an [`Error`]; errors are reserved for
//! transport and protocol failures.

#![warn(clippy::all)]

pub mod client;
pub mod config;
pub mod error;

pub use client::NumtallyClient;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use numtally_core::{HealthStatus, SumResponse};
