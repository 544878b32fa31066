//! Bounded exponential-backoff retry for generation calls

use std::future::Future;
use std::time::Duration;

use crate::domain::DomainError;

/// Retry configuration for a single-attempt async operation
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Maximum number of retries after the first attempt
    pub max_retries: u32,
    /// Delay before the first retry
    pub initial_delay_ms: u64,
    /// Maximum delay between attempts
    pub max_delay_ms: u64,
    /// Multiplier for exponential backoff
    pub backoff_multiplier: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 2,
            initial_delay_ms: 500,
            max_delay_ms: 5000,
            backoff_multiplier: 2.0,
        }
    }
}

impl RetryPolicy {
    pub fn new(max_retries: u32) -> Self {
        Self {
            max_retries,
            ..Default::default()
        }
    }

    pub fn with_initial_delay(mut self, ms: u64) -> Self {
        self.initial_delay_ms = ms;
        self
    }

    pub fn with_max_delay(mut self, ms: u64) -> Self {
        self.max_delay_ms = ms;
        self
    }

    pub fn with_backoff_multiplier(mut self, multiplier: f64) -> Self {
        self.backoff_multiplier = multiplier;
        self
    }

    /// Total attempts this policy allows
    pub fn max_attempts(&self) -> u32 {
        self.max_retries + 1
    }

    /// Delay before retrying a given attempt (0-indexed)
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        if attempt == 0 {
            return Duration::from_millis(self.initial_delay_ms);
        }

        let delay = self.initial_delay_ms as f64 * self.backoff_multiplier.powi(attempt as i32);
        let delay_ms = delay.min(self.max_delay_ms as f64) as u64;

        Duration::from_millis(delay_ms)
    }
}

/// Outcome of a retried operation: the final result plus how many
/// attempts were actually made (1..=max_attempts)
#[derive(Debug)]
pub struct RetryOutcome<T> {
    pub result: Result<T, DomainError>,
    pub attempts: u32,
}

/// Run `operation` under `policy`, sleeping the backoff delay between
/// attempts. Every failure is treated as retryable; the last error is
/// propagated unchanged when all attempts are exhausted.
pub async fn retry<T, F, Fut>(policy: &RetryPolicy, mut operation: F) -> RetryOutcome<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, DomainError>>,
{
    let max_attempts = policy.max_attempts();
    let mut last_error = None;

    for attempt in 0..max_attempts {
        if attempt > 0 {
            tokio::time::sleep(policy.delay_for_attempt(attempt - 1)).await;
        }

        match operation().await {
            Ok(value) => {
                return RetryOutcome {
                    result: Ok(value),
                    attempts: attempt + 1,
                };
            }
            Err(e) => {
                last_error = Some(e);
            }
        }
    }

    RetryOutcome {
        result: Err(last_error
            .unwrap_or_else(|| DomainError::internal("Retried operation never attempted"))),
        attempts: max_attempts,
    }
}
