use std::time::Duration;

use super::normalizer::NormalizedError;

/// Internal decision for how to proceed after a failed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Decision {
    Retry { delay: Duration },
    Fail,
}

/// Bounded retry with exponential backoff.
///
/// Only errors the normalizer marked retryable are retried. The delay for
/// attempt `n` (0-based) is `min_delay * 2^n`, or the server's `Retry-After`
/// when present, capped at `max_delay` either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub min_delay: Duration,
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 2,
            min_delay: Duration::from_secs(2),
            max_delay: Duration::from_secs(5),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_retries: u32, min_delay: Duration, max_delay: Duration) -> Self {
        Self {
            max_retries,
            min_delay,
            max_delay: max_delay.max(min_delay),
        }
    }

    /// Never retries.
    pub fn none() -> Self {
        Self::new(0, Duration::ZERO, Duration::ZERO)
    }

    pub(crate) fn backoff_delay(&self, attempt: u32, retry_after: Option<Duration>) -> Duration {
        // exponential backoff: min_delay * 2^attempt
        let factor = 1u32.checked_shl(attempt).unwrap_or(u32::MAX);
        let base = self.min_delay.saturating_mul(factor);
        retry_after.unwrap_or(base).min(self.max_delay)
    }

    /// Decide what to do next after an attempt failed.
    ///
    /// `attempt` is 0-based (first failure => attempt=0).
    pub(crate) fn decide(&self, err: &NormalizedError, attempt: u32) -> Decision {
        if err.retryable && attempt < self.max_retries {
            return Decision::Retry {
                delay: self.backoff_delay(attempt, err.retry_after),
            };
        }
        Decision::Fail
    }
}
