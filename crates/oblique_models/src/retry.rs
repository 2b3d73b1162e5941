//! Bounded linear-backoff retry around a driver call.

use crate::{GeminiResult, GenerateRequest, GenerateResponse, GenerationDriver};
use oblique_error::RetryableError;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;
use tokio_retry2::{Retry, RetryError};
use tracing::{instrument, warn};

/// Retry policy for generation calls.
///
/// The wait before attempt `k + 1` is `backoff_step * k`. There is no wait
/// after the final attempt.
///
/// # Examples
///
/// ```
/// use oblique_models::RetryConfig;
/// use std::time::Duration;
///
/// let delays: Vec<Duration> = RetryConfig::default().delays().collect();
/// assert_eq!(delays, vec![Duration::from_millis(1500), Duration::from_millis(3000)]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryConfig {
    /// Total attempts, including the first
    pub max_attempts: u32,
    /// Linear backoff unit
    pub backoff_step: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff_step: Duration::from_millis(1500),
        }
    }
}

impl RetryConfig {
    /// Create a policy.
    pub fn new(max_attempts: u32, backoff_step: Duration) -> Self {
        Self {
            max_attempts,
            backoff_step,
        }
    }

    /// A policy that makes exactly one attempt.
    pub fn no_retry() -> Self {
        Self::new(1, Duration::ZERO)
    }

    /// Attempts actually made; zero is treated as one.
    pub fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }

    /// Waits between consecutive attempts.
    pub fn delays(&self) -> impl Iterator<Item = Duration> + use<> {
        let step = self.backoff_step;
        (1..self.attempts()).map(move |k| step * k)
    }
}

/// Call the driver, retrying transient failures.
///
/// Only errors whose [`RetryableError::is_retryable`] is true (HTTP 429 and
/// 5xx) are retried. Any other error is returned immediately. When attempts
/// run out the last error is returned.
#[instrument(
    skip_all,
    fields(
        provider = driver.provider_name(),
        model = driver.model_name(),
        max_attempts = config.attempts()
    )
)]
pub async fn generate_with_retry<D>(
    driver: &D,
    req: &GenerateRequest,
    config: &RetryConfig,
) -> GeminiResult<GenerateResponse>
where
    D: GenerationDriver + ?Sized,
{
    let max_attempts = config.attempts();
    let step = config.backoff_step;
    let counter = AtomicU32::new(0);
    let counter = &counter;

    Retry::spawn(config.delays(), move || async move {
        let attempt = counter.fetch_add(1, Ordering::SeqCst) + 1;
        match driver.generate(req).await {
            Ok(response) => Ok(response),
            Err(e) if e.is_retryable() && attempt < max_attempts => {
                let wait = step * attempt;
                warn!(
                    status = e.status_code(),
                    attempt,
                    max_attempts,
                    wait_ms = wait.as_millis() as u64,
                    "Transient generation error, will retry"
                );
                Err(RetryError::Transient {
                    err: e,
                    retry_after: None,
                })
            }
            Err(e) => {
                if e.is_retryable() {
                    warn!(status = e.status_code(), attempt, "Retry attempts exhausted");
                } else {
                    warn!(error = %e, attempt, "Permanent generation error, failing immediately");
                }
                Err(RetryError::Permanent(e))
            }
        }
    })
    .await
}
