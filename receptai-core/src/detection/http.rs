//! HTTP client for the detection inference service.

use super::{postprocess_detections, DetectionError, ObjectDetector, RawDetection};
use crate::types::DetectedProduct;
use async_trait::async_trait;
use serde::Deserialize;

/// Detector backed by a remote inference service.
///
/// The service receives the raw image bytes in the request body and answers
/// with every box it found: `[{"name": "egg", "confidence": 0.93}, ...]`.
#[derive(Debug)]
pub struct HttpDetector {
    url: String,
    threshold: f32,
    client: reqwest::Client,
}

impl HttpDetector {
    pub fn new(url: String, threshold: f32) -> Self {
        Self {
            url,
            threshold,
            client: reqwest::Client::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct DetectorErrorResponse {
    error: String,
}

#[async_trait]
impl ObjectDetector for HttpDetector {
    async fn detect(&self, image: &[u8]) -> Result<Vec<DetectedProduct>, DetectionError> {
        let response = self
            .client
            .post(&self.url)
            .header("content-type", "application/octet-stream")
            .body(image.to_vec())
            .send()
            .await
            .map_err(|e| DetectionError::RequestFailed(e.to_string()))?;

        let status = response.status();

        let body = response
            .text()
            .await
            .map_err(|e| DetectionError::RequestFailed(e.to_string()))?;

        if !status.is_success() {
            let status = status.as_u16();
            if let Ok(error_response) = serde_json::from_str::<DetectorErrorResponse>(&body) {
                return Err(DetectionError::ApiError {
                    status,
                    message: error_response.error,
                });
            }
            return Err(DetectionError::ApiError {
                status,
                message: body,
            });
        }

        let raw: Vec<RawDetection> =
            serde_json::from_str(&body).map_err(|e| DetectionError::ParseError(e.to_string()))?;

        tracing::debug!(boxes = raw.len(), "Detector returned raw detections");

        Ok(postprocess_detections(raw, self.threshold))
    }

    fn detector_name(&self) -> &'static str {
        "http"
    }
}
