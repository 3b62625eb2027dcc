//! Client-side rate limiter for quote requests
//!
//! Implements GCRA (Generic Cell Rate Algorithm) via governor crate.
//! One request per configured interval (default 500ms) with a 30s queue timeout.

use governor::{
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
    Quota, RateLimiter as GovernorRateLimiter,
};
use std::time::Duration;
use thiserror::Error;
use tokio::time::timeout;
use tracing::{debug, warn};

/// Default spacing between upstream quote requests
pub const DEFAULT_INTERVAL_MS: u64 = 500;

/// Maximum time to wait in queue before rejecting request
pub const DEFAULT_QUEUE_TIMEOUT_SECS: u64 = 30;

/// Rate limiter errors
#[derive(Debug, Error)]
pub enum RateLimiterError {
    #[error("Rate limit queue timeout after {0:?}")]
    QueueTimeout(Duration),
}

/// Client-side rate limiter guarding the external quote call
///
/// Burst of one: the first request passes immediately, each later request
/// waits until one interval has elapsed since the previous permit. A zero
/// interval disables limiting. Safe to share behind an `Arc`.
pub struct RateLimiter {
    limiter: Option<GovernorRateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
    queue_timeout: Duration,
}

impl RateLimiter {
    /// Create a rate limiter permitting one request per `interval`
    pub fn with_interval(interval: Duration, queue_timeout: Duration) -> Self {
        Self {
            limiter: Quota::with_period(interval).map(GovernorRateLimiter::direct),
            queue_timeout,
        }
    }

    /// Limiter that never waits
    pub fn unlimited() -> Self {
        Self::with_interval(Duration::ZERO, Duration::from_secs(DEFAULT_QUEUE_TIMEOUT_SECS))
    }

    /// Wait for rate limit permission (async, with timeout)
    ///
    /// Returns Ok(()) when request is allowed, Err if queue timeout exceeded.
    pub async fn wait(&self) -> Result<(), RateLimiterError> {
        let Some(limiter) = &self.limiter else {
            return Ok(());
        };

        match timeout(self.queue_timeout, limiter.until_ready()).await {
            Ok(()) => {
                debug!("Rate limit permission granted");
                Ok(())
            }
            Err(_) => {
                let timeout_ms = self.queue_timeout.as_millis() as u64;
                warn!(timeout_ms, "Rate limit queue timeout exceeded");
                Err(RateLimiterError::QueueTimeout(self.queue_timeout))
            }
        }
    }

    /// Check if request can proceed immediately (non-blocking)
    ///
    /// Returns true if request is allowed, false if rate limit reached.
    pub fn check_immediate(&self) -> bool {
        self.limiter
            .as_ref()
            .map_or(true, |limiter| limiter.check().is_ok())
    }
}
