use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use rand::Rng;
use tracing::{error, warn};

use crate::config::RetryConfig;

/// Bounded retry policy.
///
/// The wait after failed attempt `n` (1-based) is `base_delay * 2^(n-1)`
/// plus a uniformly random jitter in `[0, max_jitter)`. No wait follows
/// the last attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    base_delay: Duration,
    max_jitter: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(1000),
            max_jitter: Duration::from_millis(1000),
        }
    }
}

impl From<&RetryConfig> for RetryPolicy {
    fn from(config: &RetryConfig) -> Self {
        Self::new(config.max_attempts, Duration::from_millis(config.base_delay_ms))
            .with_max_jitter(Duration::from_millis(config.max_jitter_ms))
    }
}

impl RetryPolicy {
    /// Create a policy with the default jitter. `max_attempts` below one is
    /// treated as one.
    #[must_use]
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            base_delay,
            ..Self::default()
        }
    }

    /// Replace the jitter bound. Zero disables jitter.
    #[must_use]
    pub fn with_max_jitter(mut self, max_jitter: Duration) -> Self {
        self.max_jitter = max_jitter;
        self
    }

    /// Policy that retries immediately, for tests and local tooling.
    #[must_use]
    pub fn immediate(max_attempts: u32) -> Self {
        Self::new(max_attempts, Duration::ZERO).with_max_jitter(Duration::ZERO)
    }

    #[must_use]
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    #[must_use]
    pub fn base_delay(&self) -> Duration {
        self.base_delay
    }

    #[must_use]
    pub fn max_jitter(&self) -> Duration {
        self.max_jitter
    }

    /// Deterministic part of the wait after failed attempt `attempt`.
    #[must_use]
    pub fn backoff(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1);
        let factor = 2u32.checked_pow(exponent).unwrap_or(u32::MAX);
        self.base_delay.saturating_mul(factor)
    }

    /// Full wait after failed attempt `attempt`, jitter included.
    #[must_use]
    pub fn delay_after(&self, attempt: u32) -> Duration {
        self.backoff(attempt).saturating_add(self.jitter())
    }

    fn jitter(&self) -> Duration {
        let bound = u64::try_from(self.max_jitter.as_millis()).unwrap_or(u64::MAX);
        if bound == 0 {
            return Duration::ZERO;
        }
        Duration::from_millis(rand::thread_rng().gen_range(0..bound))
    }

    /// Run `operation` until it succeeds or the attempts are used up.
    ///
    /// Returns the first success, or the error of the final attempt.
    pub async fn execute<T, E, F, Fut>(&self, mut operation: F) -> Result<T, E>
    where
        E: Display,
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let mut attempt = 1;
        loop {
            match operation().await {
                Ok(value) => return Ok(value),
                Err(e) if attempt >= self.max_attempts => {
                    error!(
                        attempts = self.max_attempts,
                        error = %e,
                        "All retry attempts failed"
                    );
                    return Err(e);
                }
                Err(e) => {
                    let delay = self.delay_after(attempt);
                    warn!(
                        attempt,
                        max_attempts = self.max_attempts,
                        delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                        error = %e,
                        "Attempt failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }
}

/// Run `operation` under the default policy (3 attempts, 1s base, 1s jitter).
pub async fn retry<T, E, F, Fut>(operation: F) -> Result<T, E>
where
    E: Display,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    RetryPolicy::default().execute(operation).await
}
