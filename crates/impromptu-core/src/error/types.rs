//! Core error type and result alias

use thiserror::Error;

/// Result type alias for Impromptu operations
pub type ImpromptuResult<T> = Result<T, ImpromptuError>;

/// Main error type for Impromptu
#[derive(Error, Debug, Clone)]
pub enum ImpromptuError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        context: Option<String>,
    },

    /// The server answered with an error status (or the request failed before a status
    /// could be attributed to it, in which case `status_code` is `None`)
    #[error("HTTP error: {message}")]
    Http {
        message: String,
        url: Option<String>,
        status_code: Option<u16>,
        context: Option<String>,
    },

    /// The request went out but no response came back (connect failure, timeout)
    #[error("Network error: {message}")]
    Network {
        message: String,
        url: Option<String>,
        context: Option<String>,
    },

    /// A transient failure persisted across every allowed attempt
    #[error("Max retries exceeded after {attempts} attempts: {source}")]
    MaxRetriesExceeded {
        attempts: u32,
        #[source]
        source: Box<ImpromptuError>,
    },

    /// The requested media or resource does not exist
    #[error("Not found: {message}")]
    NotFound {
        message: String,
        resource_type: Option<String>,
        context: Option<String>,
    },

    /// The caller is not allowed to read the media or call the API
    #[error("Access denied: {message}")]
    AccessDenied {
        message: String,
        context: Option<String>,
    },

    /// The annotation provider returned something unusable
    #[error("Annotation error: {message}")]
    Annotation {
        message: String,
        context: Option<String>,
    },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        context: Option<String>,
    },

    /// IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
        context: Option<String>,
    },

    /// Invalid input errors
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        field: Option<String>,
        context: Option<String>,
    },

    /// Anything not covered above
    #[error("Error: {message}")]
    Other {
        message: String,
        context: Option<String>,
    },
}

impl ImpromptuError {
    /// Stable error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Config { .. } => "IMPROMPTU_CONFIG",
            Self::Http { .. } => "IMPROMPTU_HTTP",
            Self::Network { .. } => "IMPROMPTU_NETWORK",
            Self::MaxRetriesExceeded { .. } => "IMPROMPTU_MAX_RETRIES",
            Self::NotFound { .. } => "IMPROMPTU_NOT_FOUND",
            Self::AccessDenied { .. } => "IMPROMPTU_ACCESS_DENIED",
            Self::Annotation { .. } => "IMPROMPTU_ANNOTATION",
            Self::Json { .. } => "IMPROMPTU_JSON",
            Self::Io { .. } => "IMPROMPTU_IO",
            Self::InvalidInput { .. } => "IMPROMPTU_INVALID_INPUT",
            Self::Other { .. } => "IMPROMPTU_OTHER",
        }
    }

    /// Context attached to this error, if any
    pub fn context(&self) -> Option<&str> {
        match self {
            Self::Config { context, .. }
            | Self::Http { context, .. }
            | Self::Network { context, .. }
            | Self::NotFound { context, .. }
            | Self::AccessDenied { context, .. }
            | Self::Annotation { context, .. }
            | Self::Json { context, .. }
            | Self::Io { context, .. }
            | Self::InvalidInput { context, .. }
            | Self::Other { context, .. } => context.as_deref(),
            Self::MaxRetriesExceeded { source, .. } => source.context(),
        }
    }

    /// HTTP status carried by this error, looking through retry exhaustion
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Http { status_code, .. } => *status_code,
            Self::MaxRetriesExceeded { source, .. } => source.status_code(),
            _ => None,
        }
    }

    /// Replace the context of this error. For exhausted retries the context goes to the
    /// last error, where [`Self::context`] reads it.
    pub fn with_context(mut self, new_context: impl Into<String>) -> Self {
        match &mut self {
            Self::Config { context, .. }
            | Self::Http { context, .. }
            | Self::Network { context, .. }
            | Self::NotFound { context, .. }
            | Self::AccessDenied { context, .. }
            | Self::Annotation { context, .. }
            | Self::Json { context, .. }
            | Self::Io { context, .. }
            | Self::InvalidInput { context, .. }
            | Self::Other { context, .. } => *context = Some(new_context.into()),
            Self::MaxRetriesExceeded { source, .. } => {
                let inner = std::mem::replace(source.as_mut(), Self::other(String::new()));
                **source = inner.with_context(new_context);
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_reaches_last_error_of_exhausted_retries() {
        let error = ImpromptuError::max_retries_exceeded(
            3,
            ImpromptuError::http_status(502, "Bad Gateway"),
        )
        .with_context("Hotel prices for Paris");

        assert_eq!(error.context(), Some("Hotel prices for Paris"));
        match &error {
            ImpromptuError::MaxRetriesExceeded { attempts, source } => {
                assert_eq!(*attempts, 3);
                assert_eq!(source.status_code(), Some(502));
                assert_eq!(source.context(), Some("Hotel prices for Paris"));
            }
            other => panic!("expected MaxRetriesExceeded, got {other:?}"),
        }
    }

    #[test]
    fn test_context_is_replaced() {
        let error = ImpromptuError::annotation("no results")
            .with_context("first")
            .with_context("second");
        assert_eq!(error.context(), Some("second"));
    }
}
