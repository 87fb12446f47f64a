//! From trait implementations for ImpromptuError conversions

use super::types::ImpromptuError;

impl From<std::io::Error> for ImpromptuError {
    fn from(error: std::io::Error) -> Self {
        Self::io(error.to_string())
    }
}

impl From<serde_json::Error> for ImpromptuError {
    fn from(error: serde_json::Error) -> Self {
        Self::json(error.to_string())
    }
}

impl From<reqwest::Error> for ImpromptuError {
    fn from(error: reqwest::Error) -> Self {
        let url = error.url().map(|u| u.to_string());

        if let Some(status) = error.status() {
            return Self::Http {
                message: error.to_string(),
                url,
                status_code: Some(status.as_u16()),
                context: None,
            };
        }

        if error.is_connect() || error.is_timeout() || error.is_request() {
            return Self::Network {
                message: error.to_string(),
                url,
                context: None,
            };
        }

        if error.is_decode() || error.is_body() {
            return Self::json(format!("Undecodable response body: {}", error));
        }

        Self::other(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.json");
        let error: ImpromptuError = io.into();
        assert_eq!(error.error_code(), "IMPROMPTU_IO");
        assert!(error.to_string().contains("missing.json"));
    }

    #[test]
    fn test_json_error_conversion() {
        let parse = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let error: ImpromptuError = parse.into();
        assert_eq!(error.error_code(), "IMPROMPTU_JSON");
    }

    #[tokio::test]
    async fn test_connect_failure_is_network_error() {
        // Port 1 on loopback is never listening in test environments
        let result = reqwest::Client::new()
            .get("http://127.0.0.1:1/hotels")
            .send()
            .await;
        let error: ImpromptuError = result.unwrap_err().into();
        assert!(matches!(error, ImpromptuError::Network { .. }), "{error:?}");
    }

    #[test]
    fn test_max_retries_keeps_status_of_last_error() {
        let error = ImpromptuError::max_retries_exceeded(
            3,
            ImpromptuError::http_status(503, "Service Unavailable"),
        );
        assert_eq!(error.status_code(), Some(503));
        assert!(error.to_string().contains("3 attempts"));
    }

    #[test]
    fn test_with_context() {
        let error = ImpromptuError::not_found("gs://bucket/clip.mp4").with_context("analysing media");
        assert_eq!(error.context(), Some("analysing media"));
    }
}
