//! # numtally-api
//!
//! HTTP API server for the numtally summation service.
//!
//! This crate provides:
//! - `POST /api/sum`: validate a list of numbers and return their sum
//! - `GET /health`: liveness with uptime
//! - A JSON 404 fallback for everything else
//! - Ingress middleware: tracing, panic capture, security headers,
//!   per-client rate limiting, CORS, body limit, and request timeout

#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::{CorsConfig, Environment, RateLimitConfig, ServerConfig};
pub use error::{ApiError, Error, Result};
pub use server::{Server, build_app};
pub use state::AppState;
