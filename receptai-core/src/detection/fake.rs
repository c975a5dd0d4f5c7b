//! Fake detector for testing.

use super::{
    postprocess_detections, DetectionError, ObjectDetector, RawDetection,
    DEFAULT_CONFIDENCE_THRESHOLD,
};
use crate::types::DetectedProduct;
use async_trait::async_trait;

/// A detector that returns canned raw detections, run through the same
/// post-processing as the real one.
#[derive(Debug, Clone)]
pub struct FakeDetector {
    detections: Vec<RawDetection>,
    failure: Option<String>,
    threshold: f32,
}

impl Default for FakeDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeDetector {
    /// A detector that finds nothing.
    pub fn new() -> Self {
        Self {
            detections: Vec::new(),
            failure: None,
            threshold: DEFAULT_CONFIDENCE_THRESHOLD,
        }
    }

    pub fn with_detections(detections: Vec<RawDetection>) -> Self {
        Self {
            detections,
            ..Self::new()
        }
    }

    /// A detector whose every call fails as if the service were down.
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::new()
        }
    }

    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }
}

#[async_trait]
impl ObjectDetector for FakeDetector {
    async fn detect(&self, _image: &[u8]) -> Result<Vec<DetectedProduct>, DetectionError> {
        if let Some(message) = &self.failure {
            return Err(DetectionError::RequestFailed(message.clone()));
        }
        Ok(postprocess_detections(
            self.detections.clone(),
            self.threshold,
        ))
    }

    fn detector_name(&self) -> &'static str {
        "fake"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fake_detector_postprocesses() {
        let detector = FakeDetector::with_detections(vec![
            RawDetection::new("egg", 0.4),
            RawDetection::new("milk", 0.9),
            RawDetection::new("milk", 0.8),
        ]);

        let products = detector.detect(b"img").await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "milk");
    }

    #[tokio::test]
    async fn test_fake_detector_threshold_override() {
        let detector =
            FakeDetector::with_detections(vec![RawDetection::new("egg", 0.4)]).with_threshold(0.3);
        assert_eq!(detector.detect(b"img").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_failing_detector() {
        let detector = FakeDetector::failing("service down");
        assert!(matches!(
            detector.detect(b"img").await,
            Err(DetectionError::RequestFailed(_))
        ));
    }
}
