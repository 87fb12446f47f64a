//! Fixed-delay retry executor for outbound requests

use super::Transient;
use super::delay::{Delay, TokioDelay};
use crate::error::ImpromptuError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use tracing::{error, info, warn};

/// Retry behaviour for outbound requests
///
/// # Example
/// ```
/// use impromptu_core::recovery::RetryConfig;
/// use std::time::Duration;
///
/// let config = RetryConfig::default()
///     .with_max_attempts(5)
///     .with_retry_delay(Duration::from_millis(200));
/// assert_eq!(config.max_attempts, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Total attempts, including the first one
    pub max_attempts: u32,
    /// Fixed delay between two attempts
    #[serde(with = "humantime_serde")]
    pub retry_delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            retry_delay: Duration::from_millis(1000),
        }
    }
}

impl RetryConfig {
    /// Set max attempts
    pub fn with_max_attempts(mut self, max: u32) -> Self {
        self.max_attempts = max;
        self
    }

    /// Set the delay between attempts
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    fn effective_attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }
}

/// Failure of a retried operation
#[derive(Debug, Error)]
pub enum RetryError<E> {
    /// A non-transient failure, surfaced unchanged
    #[error(transparent)]
    Failed(E),

    /// Every attempt failed with a transient error
    #[error("Max retries exceeded after {attempts} attempts: {last_error}")]
    MaxRetriesExceeded {
        attempts: u32,
        #[source]
        last_error: E,
    },
}

impl<E> RetryError<E> {
    /// The error returned by the final attempt
    pub fn last_error(&self) -> &E {
        match self {
            Self::Failed(error) => error,
            Self::MaxRetriesExceeded { last_error, .. } => last_error,
        }
    }

    /// Whether the retry budget was exhausted
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::MaxRetriesExceeded { .. })
    }
}

impl From<RetryError<ImpromptuError>> for ImpromptuError {
    fn from(error: RetryError<ImpromptuError>) -> Self {
        match error {
            RetryError::Failed(error) => error,
            RetryError::MaxRetriesExceeded {
                attempts,
                last_error,
            } => ImpromptuError::max_retries_exceeded(attempts, last_error),
        }
    }
}

/// Runs a request function, repeating it after a fixed delay while it fails transiently.
pub struct RetryExecutor<D: Delay = TokioDelay> {
    config: RetryConfig,
    delay: D,
}

impl RetryExecutor<TokioDelay> {
    /// Create an executor that sleeps on the tokio timer
    pub fn new(config: RetryConfig) -> Self {
        Self::with_delay(config, TokioDelay)
    }
}

impl<D: Delay> RetryExecutor<D> {
    /// Create an executor with a custom delay primitive
    pub fn with_delay(config: RetryConfig, delay: D) -> Self {
        Self { config, delay }
    }

    /// Execute `operation` until it succeeds, fails non-transiently, or runs out of
    /// attempts.
    ///
    /// # Errors
    ///
    /// - [`RetryError::Failed`] with the original error for non-transient failures
    /// - [`RetryError::MaxRetriesExceeded`] wrapping the last error once `max_attempts`
    ///   transient failures have been observed
    pub async fn execute<T, E, F, Fut>(&self, mut operation: F) -> Result<T, RetryError<E>>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Transient + Display,
    {
        let max_attempts = self.config.effective_attempts();
        let mut attempt = 1;

        loop {
            match operation().await {
                Ok(value) => {
                    if attempt > 1 {
                        info!(attempt, "request succeeded after retry");
                    }
                    return Ok(value);
                }
                Err(err) if !err.is_transient() => {
                    return Err(RetryError::Failed(err));
                }
                Err(err) if attempt >= max_attempts => {
                    error!(attempts = attempt, error = %err, "all retry attempts exhausted");
                    return Err(RetryError::MaxRetriesExceeded {
                        attempts: attempt,
                        last_error: err,
                    });
                }
                Err(err) => {
                    warn!(
                        attempt,
                        max_attempts,
                        delay_ms = self.config.retry_delay.as_millis() as u64,
                        error = %err,
                        "transient failure, retrying"
                    );
                    self.delay.delay(self.config.retry_delay).await;
                    attempt += 1;
                }
            }
        }
    }
}
