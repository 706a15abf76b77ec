//! Shared, read-only application state.

use std::sync::Arc;
use std::time::{Duration, Instant};

/// State handed to every handler.
///
/// Cheap to clone (Arc internals). Holds nothing request-scoped.
#[derive(Clone, Debug)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

#[derive(Debug)]
struct AppStateInner {
    started_at: Instant,
}

impl AppState {
    /// State for a server starting now.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                started_at: Instant::now(),
            }),
        }
    }

    /// Time since the server started.
    pub fn uptime(&self) -> Duration {
        self.inner.started_at.elapsed()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
