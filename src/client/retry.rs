//! Retry with exponential backoff for throttled service calls
//!
//! Only throttling responses are retried. Every other error is returned to the
//! caller on the first attempt.

use std::future::Future;
use std::time::Duration;

use log::{debug, warn};

use crate::error::{ApiError, Error, Result};

/// Default number of attempts, including the first one.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

/// Default delay before the first retry.
pub const DEFAULT_BASE_DELAY: Duration = Duration::from_millis(100);

/// Default ceiling for a single backoff delay.
pub const DEFAULT_MAX_DELAY: Duration = Duration::from_secs(20);

/// Backoff policy applied around each service call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first one
    pub max_attempts: u32,
    /// Delay before the first retry; doubles on every further retry
    pub base_delay: Duration,
    /// Ceiling for a single delay
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            base_delay: DEFAULT_BASE_DELAY,
            max_delay: DEFAULT_MAX_DELAY,
        }
    }
}

impl RetryPolicy {
    /// Create a policy with explicit settings. `max_attempts` is at least 1.
    pub fn new(max_attempts: u32, base_delay: Duration, max_delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            base_delay,
            max_delay,
        }
    }

    /// Backoff before retry number `retry` (1-based).
    pub fn delay_for(&self, retry: u32) -> Duration {
        let factor = 2u32.saturating_pow(retry.saturating_sub(1));
        self.base_delay
            .checked_mul(factor)
            .unwrap_or(self.max_delay)
            .min(self.max_delay)
    }

    /// Run `call`, retrying throttled attempts until the policy is exhausted.
    ///
    /// A server-provided retry-after hint wins over the computed delay, still
    /// capped at `max_delay`.
    pub async fn run<T, F, Fut>(&self, operation: &str, mut call: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let mut attempt = 1;
        loop {
            match call().await {
                Err(Error::Api(err)) if err.is_throttling() && attempt < self.max_attempts => {
                    let hinted = match &err {
                        ApiError::Throttled { retry_after, .. } => *retry_after,
                        _ => None,
                    };
                    let delay = hinted
                        .map(|d| d.min(self.max_delay))
                        .unwrap_or_else(|| self.delay_for(attempt));

                    debug!(
                        "{} throttled (attempt {}/{}), retrying in {:?}",
                        operation, attempt, self.max_attempts, delay
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(Error::Api(err)) if err.is_throttling() => {
                    warn!(
                        "{} still throttled after {} attempts",
                        operation, self.max_attempts
                    );
                    return Err(err.into());
                }
                other => return other,
            }
        }
    }
}
