//! Failure recovery for outbound requests
//!
//! - Transient-failure classification via the [`Transient`] capability
//! - A fixed-delay [`RetryExecutor`] that only retries transient failures
//! - The [`Delay`] primitive the executor suspends on between attempts

pub mod delay;
pub mod retry;

pub use delay::{Delay, TokioDelay};
pub use retry::{RetryConfig, RetryError, RetryExecutor};

use crate::error::ImpromptuError;

/// Capability check used by the retry executor to decide whether a failure is worth
/// another attempt.
pub trait Transient {
    /// Whether the same request may succeed if repeated
    fn is_transient(&self) -> bool;
}

impl Transient for ImpromptuError {
    /// Only server-side (5xx) responses are transient. Client errors, missing responses
    /// and decoding failures are surfaced on the first attempt.
    fn is_transient(&self) -> bool {
        matches!(
            self,
            ImpromptuError::Http {
                status_code: Some(code),
                ..
            } if *code >= 500
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_errors_are_transient() {
        assert!(ImpromptuError::http_status(500, "Internal Server Error").is_transient());
        assert!(ImpromptuError::http_status(503, "Service Unavailable").is_transient());
    }

    #[test]
    fn test_client_and_network_errors_are_not_transient() {
        assert!(!ImpromptuError::http_status(400, "Bad Request").is_transient());
        assert!(!ImpromptuError::http_status(429, "Too Many Requests").is_transient());
        assert!(!ImpromptuError::http("builder error").is_transient());
        assert!(!ImpromptuError::network("connection refused").is_transient());
        assert!(!ImpromptuError::not_found("missing").is_transient());
    }

    #[test]
    fn test_exhausted_retries_are_not_transient() {
        let error = ImpromptuError::max_retries_exceeded(
            3,
            ImpromptuError::http_status(502, "Bad Gateway"),
        );
        assert!(!error.is_transient());
    }
}
