//! Video annotation client against a mock annotation API

use impromptu_core::annotation::{MediaAnalyser, VideoIntelligenceClient};
use impromptu_core::config::AnnotationConfig;
use impromptu_core::error::ImpromptuError;
use serde_json::{Value, json};
use std::time::Duration;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const OPERATION: &str = "projects/demo/locations/us-east1/operations/7";

fn client(server: &MockServer, api_key: Option<&str>) -> VideoIntelligenceClient {
    VideoIntelligenceClient::new(AnnotationConfig {
        base_url: server.uri(),
        api_key: api_key.map(str::to_string),
        poll_interval: Duration::from_millis(10),
        ..Default::default()
    })
    .unwrap()
}

fn finished(results: Value) -> Value {
    json!({
        "name": OPERATION,
        "done": true,
        "response": {"annotationResults": results}
    })
}

async fn mount_annotate(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/v1/videos:annotate"))
        .respond_with(template)
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_annotate_polls_until_done() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/videos:annotate"))
        .and(query_param("key", "secret"))
        .and(body_json(json!({
            "inputUri": "gs://bucket/holiday.mp4",
            "features": ["OBJECT_TRACKING", "LABEL_DETECTION", "TEXT_DETECTION"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": OPERATION})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/v1/{OPERATION}")))
        .and(query_param("key", "secret"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"name": OPERATION, "done": false})),
        )
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/v1/{OPERATION}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(finished(json!([{
            "objectAnnotations": [{"entity": {"description": "Eiffel Tower"}}],
            "labelAnnotations": [{"description": "Seine"}, {"description": "river"}],
            "textAnnotations": [{"text": "Paris"}]
        }]))))
        .expect(1)
        .mount(&server)
        .await;

    let result = client(&server, Some("secret"))
        .analyse_media("gs://bucket/holiday.mp4")
        .await
        .unwrap();

    assert_eq!(result.objects, vec!["Eiffel Tower"]);
    assert_eq!(result.labels, vec!["Seine", "river"]);
    assert_eq!(result.texts, vec!["Paris"]);
}

#[tokio::test]
async fn test_already_finished_operation_is_not_polled() {
    let server = MockServer::start().await;
    mount_annotate(
        &server,
        ResponseTemplate::new(200)
            .set_body_json(finished(json!([{"textAnnotations": [{"text": "Louvre"}]}]))),
    )
    .await;

    let result = client(&server, None)
        .analyse_media("gs://bucket/museum.mp4")
        .await
        .unwrap();

    assert_eq!(result.texts, vec!["Louvre"]);
    assert!(result.objects.is_empty());

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn test_missing_media_is_not_found() {
    let server = MockServer::start().await;
    mount_annotate(
        &server,
        ResponseTemplate::new(404).set_body_json(json!({"error": {"status": "NOT_FOUND"}})),
    )
    .await;

    let err = client(&server, None)
        .analyse_media("gs://bucket/missing.mp4")
        .await
        .unwrap_err();

    assert!(matches!(err, ImpromptuError::NotFound { .. }), "{err:?}");
}

#[tokio::test]
async fn test_forbidden_is_access_denied() {
    let server = MockServer::start().await;
    mount_annotate(
        &server,
        ResponseTemplate::new(403).set_body_json(json!({"error": {"status": "PERMISSION_DENIED"}})),
    )
    .await;

    let err = client(&server, Some("wrong"))
        .analyse_media("gs://private/clip.mp4")
        .await
        .unwrap_err();

    assert!(matches!(err, ImpromptuError::AccessDenied { .. }), "{err:?}");
}

#[tokio::test]
async fn test_failed_operation_maps_grpc_code() {
    let server = MockServer::start().await;
    mount_annotate(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({"name": OPERATION})),
    )
    .await;
    Mock::given(method("GET"))
        .and(path(format!("/v1/{OPERATION}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": OPERATION,
            "done": true,
            "error": {"code": 5, "message": "object not found"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let err = client(&server, None)
        .analyse_media("gs://bucket/gone.mp4")
        .await
        .unwrap_err();

    assert!(matches!(err, ImpromptuError::NotFound { .. }), "{err:?}");
    assert!(err.to_string().contains("object not found"));
}

#[tokio::test]
async fn test_empty_results_are_an_annotation_error() {
    let server = MockServer::start().await;
    mount_annotate(
        &server,
        ResponseTemplate::new(200).set_body_json(finished(json!([]))),
    )
    .await;

    let err = client(&server, None)
        .analyse_media("gs://bucket/blank.mp4")
        .await
        .unwrap_err();

    assert!(matches!(err, ImpromptuError::Annotation { .. }), "{err:?}");
}

#[tokio::test]
async fn test_server_error_is_not_retried() {
    let server = MockServer::start().await;
    mount_annotate(
        &server,
        ResponseTemplate::new(500).set_body_json(json!({"error": "internal"})),
    )
    .await;

    let err = client(&server, None)
        .analyse_media("gs://bucket/clip.mp4")
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), Some(500));
}
