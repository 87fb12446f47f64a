//! Video annotation REST client

use super::MediaAnalyser;
use super::types::{
    AnnotateVideoRequest, AnnotateVideoResponse, AnnotationResult, GRPC_NOT_FOUND,
    GRPC_PERMISSION_DENIED, GRPC_UNAUTHENTICATED, Operation, OperationStatus,
};
use crate::config::AnnotationConfig;
use crate::error::{ImpromptuError, ImpromptuResult};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use tracing::instrument;

/// Client for the video-intelligence `videos:annotate` API.
///
/// Submitting a request returns a long-running operation; the client polls it until the
/// provider marks it done. There is no overall deadline, only a per-request timeout.
pub struct VideoIntelligenceClient {
    config: AnnotationConfig,
    http_client: Client,
}

impl VideoIntelligenceClient {
    pub fn new(config: AnnotationConfig) -> ImpromptuResult<Self> {
        let http_client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| {
                ImpromptuError::config(format!("Failed to build annotation HTTP client: {}", e))
            })?;

        Ok(Self {
            config,
            http_client,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/v1/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.config.api_key {
            Some(key) => request.query(&[("key", key)]),
            None => request,
        }
    }

    /// Submit the annotation request and return the operation handle
    async fn start(&self, source_uri: &str) -> ImpromptuResult<Operation> {
        let request = self
            .http_client
            .post(self.endpoint("videos:annotate"))
            .json(&AnnotateVideoRequest::new(source_uri));

        let response = self.authorize(request).send().await?;
        let operation: Operation = check_status(response).await?.json().await?;
        tracing::debug!(operation = %operation.name, "annotation operation started");
        Ok(operation)
    }

    async fn poll(&self, name: &str) -> ImpromptuResult<Operation> {
        let request = self.http_client.get(self.endpoint(name));
        let response = self.authorize(request).send().await?;
        Ok(check_status(response).await?.json().await?)
    }

    /// Wait for the operation to finish and return its response
    async fn wait(&self, mut operation: Operation) -> ImpromptuResult<AnnotateVideoResponse> {
        let mut polls = 0u32;
        while !operation.done {
            if operation.name.is_empty() {
                return Err(ImpromptuError::annotation(
                    "Provider returned an unfinished operation without a name",
                ));
            }
            tokio::time::sleep(self.config.poll_interval).await;
            polls += 1;
            tracing::debug!(operation = %operation.name, polls, "polling annotation operation");
            operation = self.poll(&operation.name).await?;
        }

        if let Some(status) = operation.error {
            return Err(operation_error(status));
        }

        operation.response.ok_or_else(|| {
            ImpromptuError::annotation("Annotation operation finished without a response")
        })
    }

    /// Run the whole annotate-and-wait exchange without logging failures
    pub async fn annotate(&self, source_uri: &str) -> ImpromptuResult<AnnotationResult> {
        let operation = self.start(source_uri).await?;
        let response = self.wait(operation).await?;

        let first = response.annotation_results.first().ok_or_else(|| {
            ImpromptuError::annotation("Annotation response contained no results")
        })?;
        Ok(AnnotationResult::from(first))
    }
}

#[async_trait]
impl MediaAnalyser for VideoIntelligenceClient {
    #[instrument(skip(self), level = "info")]
    async fn analyse_media(&self, source_uri: &str) -> ImpromptuResult<AnnotationResult> {
        let result = self
            .annotate(source_uri)
            .await
            .inspect_err(|e| super::log_annotation_failure(source_uri, e))?;

        tracing::info!(
            objects = result.objects.len(),
            labels = result.labels.len(),
            texts = result.texts.len(),
            "media analysed"
        );
        Ok(result)
    }
}

/// Turn a non-success response into an error, keeping the status and body
async fn check_status(response: Response) -> ImpromptuResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().to_string();
    let body = response.text().await.unwrap_or_default();
    let message = format!("Annotation API error (status {}): {}", status, body);

    let error = match status {
        StatusCode::NOT_FOUND => ImpromptuError::not_found_resource(message, "media"),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ImpromptuError::access_denied(message),
        _ => ImpromptuError::Http {
            message,
            url: Some(url),
            status_code: Some(status.as_u16()),
            context: None,
        },
    };
    Err(error)
}

fn operation_error(status: OperationStatus) -> ImpromptuError {
    let message = format!(
        "Annotation operation failed (code {}): {}",
        status.code, status.message
    );
    match status.code {
        GRPC_NOT_FOUND => ImpromptuError::not_found_resource(message, "media"),
        GRPC_PERMISSION_DENIED | GRPC_UNAUTHENTICATED => ImpromptuError::access_denied(message),
        _ => ImpromptuError::annotation(message),
    }
}
