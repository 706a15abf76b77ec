//! Per-client rate limiting.
//!
//! Each client IP gets a GCRA bucket holding `max_requests` cells that
//! refill evenly over `window_secs`. Requests without connection info
//! (in-process tests, some proxies) share the unspecified-address bucket.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{ConnectInfo, Request, State};
use axum::http::{HeaderName, HeaderValue, StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use governor::clock::Clock;
use governor::middleware::StateInformationMiddleware;
use governor::{DefaultKeyedRateLimiter, Quota, RateLimiter};

use crate::config::RateLimitConfig;
use crate::error::{Error, Result};

/// Body of a 429 response.
pub const RATE_LIMIT_MESSAGE: &str = "Too many requests from this IP, please try again later.";

const X_RATELIMIT_LIMIT: HeaderName = HeaderName::from_static("x-ratelimit-limit");
const X_RATELIMIT_REMAINING: HeaderName = HeaderName::from_static("x-ratelimit-remaining");

// Stale buckets are dropped once the map grows past this many clients.
const PRUNE_THRESHOLD: usize = 10_000;

/// Shared keyed limiter.
#[derive(Clone)]
pub struct ClientRateLimiter {
    limiter: Arc<DefaultKeyedRateLimiter<IpAddr, StateInformationMiddleware>>,
    limit: HeaderValue,
}

impl ClientRateLimiter {
    /// Build a limiter from config.
    ///
    /// # Errors
    /// Returns a config error if the allowance or window is zero.
    pub fn from_config(cfg: &RateLimitConfig) -> Result<Self> {
        let burst = NonZeroU32::new(cfg.max_requests)
            .ok_or_else(|| Error::config("rate_limit.max_requests must be greater than 0"))?;
        let period = Duration::from_secs(cfg.window_secs) / cfg.max_requests;
        let quota = Quota::with_period(period)
            .ok_or_else(|| Error::config("rate_limit.window_secs must be greater than 0"))?
            .allow_burst(burst);

        Ok(Self {
            limiter: Arc::new(
                RateLimiter::keyed(quota).with_middleware::<StateInformationMiddleware>(),
            ),
            limit: HeaderValue::from(cfg.max_requests),
        })
    }

    /// Take one cell for `client`.
    ///
    /// Returns the remaining allowance, or how long to wait before retrying.
    pub fn check(&self, client: IpAddr) -> std::result::Result<u32, Duration> {
        let outcome = match self.limiter.check_key(&client) {
            Ok(snapshot) => Ok(snapshot.remaining_burst_capacity()),
            Err(not_until) => Err(not_until.wait_time_from(self.limiter.clock().now())),
        };
        if self.limiter.len() > PRUNE_THRESHOLD {
            self.limiter.retain_recent();
        }
        outcome
    }
}

/// Whole seconds to wait, rounded up and never below one.
fn retry_after_secs(wait: Duration) -> u64 {
    (wait.as_secs() + u64::from(wait.subsec_nanos() > 0)).max(1)
}

fn client_ip(req: &Request) -> IpAddr {
    req.extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip())
        .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED))
}

/// Reject clients that exhausted their allowance with 429.
pub async fn rate_limit_middleware(
    State(limiter): State<ClientRateLimiter>,
    req: Request,
    next: Next,
) -> Response {
    let client = client_ip(&req);
    match limiter.check(client) {
        Ok(remaining) => {
            let mut response = next.run(req).await;
            let headers = response.headers_mut();
            headers.insert(X_RATELIMIT_LIMIT, limiter.limit.clone());
            headers.insert(X_RATELIMIT_REMAINING, remaining.into());
            response
        }
        Err(wait) => {
            let retry_after = retry_after_secs(wait);
            tracing::warn!(client = %client, retry_after, "Rate limit exceeded");
            (
                StatusCode::TOO_MANY_REQUESTS,
                [
                    (header::RETRY_AFTER, HeaderValue::from(retry_after)),
                    (X_RATELIMIT_LIMIT, limiter.limit.clone()),
                ],
                RATE_LIMIT_MESSAGE,
            )
                .into_response()
        }
    }
}
