//! Configuration model

use crate::error::{ImpromptuError, ImpromptuResult};
use crate::lexicon::LocationLexicon;
use crate::recovery::RetryConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default video annotation endpoint
pub const DEFAULT_VIDEO_BASE_URL: &str = "https://videointelligence.googleapis.com";

/// Default travel price endpoint
pub const DEFAULT_PRICES_BASE_URL: &str = "https://api.example.com";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub annotation: AnnotationConfig,
    pub prices: PriceApiConfig,
    pub retry: RetryConfig,
    pub lexicon: LocationLexicon,
    pub logging: LoggingConfig,
}

impl Config {
    pub fn validate(&self) -> ImpromptuResult<()> {
        if self.annotation.base_url.trim().is_empty() {
            return Err(ImpromptuError::config("annotation.base_url cannot be empty"));
        }
        if self.annotation.poll_interval.is_zero() {
            return Err(ImpromptuError::config(
                "annotation.poll_interval must be greater than zero",
            ));
        }
        if self.prices.base_url.trim().is_empty() {
            return Err(ImpromptuError::config("prices.base_url cannot be empty"));
        }
        if self.retry.max_attempts == 0 {
            return Err(ImpromptuError::config(
                "retry.max_attempts must be at least 1",
            ));
        }
        self.lexicon
            .validate()
            .map_err(|e| ImpromptuError::config(format!("Invalid lexicon: {}", e)))
    }
}

/// Video annotation provider settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotationConfig {
    pub base_url: String,
    /// Sent as the `key` query parameter when present
    pub api_key: Option<String>,
    /// How often the long-running annotation operation is polled
    #[serde(with = "humantime_serde")]
    pub poll_interval: Duration,
    /// Timeout of each individual HTTP call (not of the whole operation)
    #[serde(with = "humantime_serde")]
    pub request_timeout: Duration,
}

impl Default for AnnotationConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_VIDEO_BASE_URL.to_string(),
            api_key: None,
            poll_interval: Duration::from_secs(5),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Flight and hotel price endpoint settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceApiConfig {
    pub base_url: String,
    #[serde(with = "humantime_serde")]
    pub request_timeout: Duration,
}

impl Default for PriceApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_PRICES_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl PriceApiConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json: false,
        }
    }
}
