use std::collections::BTreeSet;

use bytes::Bytes;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error, instrument};
use url::Url;

use crate::domain::{
    common::entities::app_errors::CoreError, ingredient::ports::IngredientRecognizer,
};

pub const DEFAULT_CONFIDENCE_THRESHOLD: f32 = 0.3;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Detection {
    pub label: String,
    pub confidence: f32,
}

#[derive(Debug, Deserialize)]
struct DetectionResponse {
    detections: Vec<Detection>,
}

/// Multi-label recognizer backed by an external object-detection service.
///
/// The raw image is POSTed as `application/octet-stream`; the service answers
/// `{"detections": [{"label": "...", "confidence": 0.87}, ...]}`.
#[derive(Debug, Clone)]
pub struct HttpIngredientDetector {
    client: Client,
    endpoint: Url,
    confidence_threshold: f32,
}

impl HttpIngredientDetector {
    pub fn new(endpoint: Url, confidence_threshold: f32) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            confidence_threshold,
        }
    }
}

/// Keeps the distinct labels detected above `threshold`, in first-seen order.
pub fn select_labels(detections: Vec<Detection>, threshold: f32) -> Vec<String> {
    let mut seen = BTreeSet::new();
    detections
        .into_iter()
        .filter(|d| d.confidence > threshold)
        .filter(|d| seen.insert(d.label.clone()))
        .map(|d| d.label)
        .collect()
}

impl IngredientRecognizer for HttpIngredientDetector {
    #[instrument(skip(self, image), fields(endpoint = %self.endpoint, bytes = image.len()))]
    async fn recognize(&self, image: Bytes) -> Result<Vec<String>, CoreError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(reqwest::header::CONTENT_TYPE, "application/octet-stream")
            .body(image)
            .send()
            .await
            .map_err(|e| {
                error!("Detector request failed: {}", e);
                CoreError::RecognitionFailed(format!("detector unreachable: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!("Detector answered {}: {}", status, body);
            return Err(CoreError::RecognitionFailed(format!(
                "detector answered {}",
                status
            )));
        }

        let payload: DetectionResponse = response.json().await.map_err(|e| {
            error!("Failed to parse detector response: {}", e);
            CoreError::RecognitionFailed(format!("invalid detector response: {}", e))
        })?;

        debug!(detections = payload.detections.len(), "detector answered");

        Ok(select_labels(payload.detections, self.confidence_threshold))
    }
}
