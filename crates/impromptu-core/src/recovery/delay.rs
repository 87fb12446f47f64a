//! Delay primitive used between retry attempts

use async_trait::async_trait;
use std::time::Duration;

/// Suspends the current task for a duration.
///
/// The retry executor is the only caller. Tests substitute an implementation that records
/// the requested delays instead of sleeping.
#[async_trait]
pub trait Delay: Send + Sync {
    async fn delay(&self, duration: Duration);
}

/// Delay backed by the tokio timer
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioDelay;

#[async_trait]
impl Delay for TokioDelay {
    async fn delay(&self, duration: Duration) {
        if !duration.is_zero() {
            tokio::time::sleep(duration).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn test_tokio_delay_waits() {
        let start = Instant::now();
        TokioDelay.delay(Duration::from_millis(20)).await;
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[tokio::test]
    async fn test_zero_delay_returns_immediately() {
        let start = Instant::now();
        TokioDelay.delay(Duration::ZERO).await;
        assert!(start.elapsed() < Duration::from_millis(50));
    }
}
