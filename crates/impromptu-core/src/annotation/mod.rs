//! Media annotation
//!
//! Sends a video or image locator to the annotation provider and reduces the nested
//! response to three flat lists of entity strings.

mod client;
pub mod types;

pub use client::VideoIntelligenceClient;
pub use types::{AnnotationResult, Feature, REQUESTED_FEATURES};

use crate::error::{ImpromptuError, ImpromptuResult};
use async_trait::async_trait;

/// Anything that can turn a media locator into detected entities
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MediaAnalyser: Send + Sync {
    /// Analyse the media at `source_uri`. Failures are logged by category and returned
    /// unchanged.
    async fn analyse_media(&self, source_uri: &str) -> ImpromptuResult<AnnotationResult>;
}

/// Failure categories reported for media analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationFailure {
    /// The media does not exist
    NotFound,
    /// The caller may not read the media or use the API
    AccessDenied,
    Other,
}

impl AnnotationFailure {
    pub fn classify(error: &ImpromptuError) -> Self {
        match error {
            ImpromptuError::NotFound { .. } => Self::NotFound,
            ImpromptuError::AccessDenied { .. } => Self::AccessDenied,
            _ => Self::Other,
        }
    }
}

pub(crate) fn log_annotation_failure(source_uri: &str, error: &ImpromptuError) {
    match AnnotationFailure::classify(error) {
        AnnotationFailure::NotFound => {
            tracing::error!(source_uri, error = %error, "media not found");
        }
        AnnotationFailure::AccessDenied => {
            tracing::error!(source_uri, error = %error, "access denied to media or annotation API");
        }
        AnnotationFailure::Other => {
            tracing::error!(
                source_uri,
                error = %error,
                code = error.error_code(),
                "error analysing media"
            );
        }
    }
}
