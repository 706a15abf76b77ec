//! Route table.

use axum::Router;
use axum::routing::{get, post};

use crate::handlers;
use crate::state::AppState;

/// Path of the sum endpoint.
pub const SUM_PATH: &str = "/api/sum";
/// Path of the health endpoint.
pub const HEALTH_PATH: &str = "/health";

/// Bare routes without middleware.
///
/// Each path also answers with a single trailing slash. A known path
/// requested with the wrong method answers 404 like any unknown path, not
/// 405.
pub fn routes(state: AppState) -> Router {
    let health = get(handlers::health).fallback(handlers::not_found);
    let sum = post(handlers::sum_numbers).fallback(handlers::not_found);

    Router::new()
        .route(HEALTH_PATH, health.clone())
        .route(&format!("{HEALTH_PATH}/"), health)
        .route(SUM_PATH, sum.clone())
        .route(&format!("{SUM_PATH}/"), sum)
        .fallback(handlers::not_found)
        .with_state(state)
}
