//! Annotation data model and provider wire format

use serde::{Deserialize, Serialize};

/// Entities detected in one piece of media, flattened to plain strings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationResult {
    pub objects: Vec<String>,
    pub labels: Vec<String>,
    pub texts: Vec<String>,
}

impl AnnotationResult {
    /// Objects, then labels, then texts, as one list
    pub fn entities(&self) -> Vec<&str> {
        self.objects
            .iter()
            .chain(&self.labels)
            .chain(&self.texts)
            .map(String::as_str)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty() && self.labels.is_empty() && self.texts.is_empty()
    }
}

/// Analysis features requested from the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Feature {
    ObjectTracking,
    LabelDetection,
    TextDetection,
}

/// Every analysis request asks for the same three features
pub const REQUESTED_FEATURES: [Feature; 3] = [
    Feature::ObjectTracking,
    Feature::LabelDetection,
    Feature::TextDetection,
];

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotateVideoRequest<'a> {
    pub input_uri: &'a str,
    pub features: &'a [Feature],
}

impl<'a> AnnotateVideoRequest<'a> {
    pub fn new(input_uri: &'a str) -> Self {
        Self {
            input_uri,
            features: &REQUESTED_FEATURES,
        }
    }
}

/// Long-running operation handle returned by the provider
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Operation {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub done: bool,
    pub error: Option<OperationStatus>,
    pub response: Option<AnnotateVideoResponse>,
}

/// Status of a failed operation, using gRPC status codes
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OperationStatus {
    #[serde(default)]
    pub code: i32,
    #[serde(default)]
    pub message: String,
}

/// gRPC `NOT_FOUND`
pub const GRPC_NOT_FOUND: i32 = 5;
/// gRPC `PERMISSION_DENIED`
pub const GRPC_PERMISSION_DENIED: i32 = 7;
/// gRPC `UNAUTHENTICATED`
pub const GRPC_UNAUTHENTICATED: i32 = 16;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotateVideoResponse {
    #[serde(default)]
    pub annotation_results: Vec<VideoAnnotationResults>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoAnnotationResults {
    #[serde(default)]
    pub object_annotations: Vec<ObjectTrackingAnnotation>,
    #[serde(default)]
    pub label_annotations: Vec<LabelAnnotation>,
    #[serde(default)]
    pub text_annotations: Vec<TextAnnotation>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Entity {
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ObjectTrackingAnnotation {
    pub entity: Option<Entity>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LabelAnnotation {
    pub description: Option<String>,
    pub entity: Option<Entity>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TextAnnotation {
    pub text: Option<String>,
}

impl From<&VideoAnnotationResults> for AnnotationResult {
    /// Annotations without a description or text are dropped.
    fn from(results: &VideoAnnotationResults) -> Self {
        let objects = results
            .object_annotations
            .iter()
            .filter_map(|obj| obj.entity.as_ref()?.description.clone())
            .collect();

        let labels = results
            .label_annotations
            .iter()
            .filter_map(|label| {
                label
                    .description
                    .clone()
                    .or_else(|| label.entity.as_ref()?.description.clone())
            })
            .collect();

        let texts = results
            .text_annotations
            .iter()
            .filter_map(|text| text.text.clone())
            .collect();

        Self {
            objects,
            labels,
            texts,
        }
    }
}
