// src/proxy/retry.rs
// Bounded exponential backoff for rate-limited backend calls

use async_trait::async_trait;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

use crate::llm::BackendError;

/// Default total attempts (first call included)
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
/// Default delay after the first rate-limited attempt
pub const DEFAULT_BASE_DELAY: Duration = Duration::from_secs(1);
/// Default backoff multiplier
pub const DEFAULT_FACTOR: u32 = 2;

/// Suspends the retry loop between attempts
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Real sleeper backed by the tokio timer
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

#[derive(Error, Debug)]
pub enum RetryError {
    /// Every attempt was rate limited
    #[error("max retries exceeded after {attempts} attempts")]
    Exhausted {
        attempts: u32,
        #[source]
        last: BackendError,
    },

    /// A non-retryable failure ended the loop
    #[error(transparent)]
    Fatal(BackendError),
}

/// Where the retry loop is. `n` is the zero-based attempt index.
#[derive(Debug)]
enum RetryState<T> {
    Attempting(u32),
    RateLimited(u32, BackendError),
    Success(T),
    Failed(RetryError),
}

/// Retry on rate limiting only: `max_attempts` calls in total, waiting
/// `base_delay * factor^n` after failed attempt `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub factor: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            base_delay: DEFAULT_BASE_DELAY,
            factor: DEFAULT_FACTOR,
        }
    }
}

impl RetryPolicy {
    /// Wait after failed attempt `attempt` (zero-based)
    pub fn backoff(&self, attempt: u32) -> Duration {
        self.base_delay
            .saturating_mul(self.factor.saturating_pow(attempt))
    }

    /// Drive `op` through the retry state machine. `op` receives the attempt index.
    pub async fn run<T, F, Fut>(
        &self,
        request_id: &str,
        sleeper: &dyn Sleeper,
        mut op: F,
    ) -> Result<T, RetryError>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<T, BackendError>>,
    {
        let mut state = RetryState::Attempting(0);

        loop {
            state = match state {
                RetryState::Attempting(n) => {
                    debug!(request_id = %request_id, attempt = n + 1, "Calling backend");
                    match op(n).await {
                        Ok(value) => RetryState::Success(value),
                        Err(e) if e.is_rate_limited() => RetryState::RateLimited(n, e),
                        Err(e) => RetryState::Failed(RetryError::Fatal(e)),
                    }
                }
                RetryState::RateLimited(n, e) if n + 1 < self.max_attempts => {
                    let delay = self.backoff(n);
                    warn!(
                        request_id = %request_id,
                        attempt = n + 1,
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "Rate limited, retrying"
                    );
                    sleeper.sleep(delay).await;
                    RetryState::Attempting(n + 1)
                }
                RetryState::RateLimited(n, e) => RetryState::Failed(RetryError::Exhausted {
                    attempts: n + 1,
                    last: e,
                }),
                RetryState::Success(value) => return Ok(value),
                RetryState::Failed(err) => return Err(err),
            };
        }
    }
}
