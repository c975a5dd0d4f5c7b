//! Food product detection on photos.
//!
//! The model itself runs as an external inference service. This module owns
//! the client side: a trait so request handlers can be tested with a fake, an
//! HTTP implementation, and the post-processing that turns raw boxes into the
//! product list returned to the app.

mod fake;
mod http;

pub use fake::FakeDetector;
pub use http::HttpDetector;

use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

use crate::types::DetectedProduct;

/// Detections below this confidence are dropped.
pub const DEFAULT_CONFIDENCE_THRESHOLD: f32 = 0.5;

#[derive(Debug, Error)]
pub enum DetectionError {
    #[error("Detector request failed: {0}")]
    RequestFailed(String),

    #[error("Detector returned error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to parse detector response: {0}")]
    ParseError(String),

    #[error("Detector not configured: {0}")]
    NotConfigured(String),
}

/// One bounding box as reported by the model, before post-processing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawDetection {
    pub name: String,
    pub confidence: f32,
}

impl RawDetection {
    pub fn new(name: impl Into<String>, confidence: f32) -> Self {
        Self {
            name: name.into(),
            confidence,
        }
    }
}

/// Trait for object detectors.
#[async_trait]
pub trait ObjectDetector: Send + Sync + fmt::Debug {
    /// Detect food products on an already validated image.
    ///
    /// Results are deduplicated by name and sorted by confidence, highest first.
    async fn detect(&self, image: &[u8]) -> Result<Vec<DetectedProduct>, DetectionError>;

    fn detector_name(&self) -> &'static str;
}

/// Turn raw model output into the product list.
///
/// Drops boxes under `threshold`, keeps one entry per product name (the most
/// confident one), rounds confidence to two decimals and sorts by confidence
/// descending. Equal confidences are ordered by name so output is stable.
pub fn postprocess_detections(raw: Vec<RawDetection>, threshold: f32) -> Vec<DetectedProduct> {
    let mut best: HashMap<String, f32> = HashMap::new();

    for detection in raw {
        if detection.confidence.is_nan() || detection.confidence < threshold {
            continue;
        }
        best.entry(detection.name)
            .and_modify(|c| *c = c.max(detection.confidence))
            .or_insert(detection.confidence);
    }

    let mut products: Vec<DetectedProduct> = best
        .into_iter()
        .map(|(name, confidence)| DetectedProduct {
            name,
            confidence: round_confidence(confidence),
        })
        .collect();

    products.sort_by(|a, b| {
        b.confidence
            .total_cmp(&a.confidence)
            .then_with(|| a.name.cmp(&b.name))
    });

    products
}

fn round_confidence(confidence: f32) -> f32 {
    (confidence.clamp(0.0, 1.0) * 100.0).round() / 100.0
}

/// Build a detector from environment variables.
///
/// - DETECTOR_PROVIDER: "http" (default) | "fake"
/// - DETECTOR_URL: inference endpoint, required for "http"
/// - CONFIDENCE_THRESHOLD: minimum confidence (default 0.5)
pub fn create_detector_from_env() -> Result<Box<dyn ObjectDetector>, DetectionError> {
    let provider = std::env::var("DETECTOR_PROVIDER").unwrap_or_else(|_| "http".to_string());

    let threshold = match std::env::var("CONFIDENCE_THRESHOLD") {
        Ok(v) => v.parse::<f32>().map_err(|_| {
            DetectionError::NotConfigured(format!("Invalid CONFIDENCE_THRESHOLD: {}", v))
        })?,
        Err(_) => DEFAULT_CONFIDENCE_THRESHOLD,
    };

    match provider.as_str() {
        "fake" => Ok(Box::new(FakeDetector::new().with_threshold(threshold))),
        "http" => {
            let url = std::env::var("DETECTOR_URL")
                .map_err(|_| DetectionError::NotConfigured("DETECTOR_URL not set".to_string()))?;
            Ok(Box::new(HttpDetector::new(url, threshold)))
        }
        other => Err(DetectionError::NotConfigured(format!(
            "Unknown detector provider: {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_filters() {
        let products = postprocess_detections(
            vec![RawDetection::new("egg", 0.9), RawDetection::new("milk", 0.3)],
            0.5,
        );
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "egg");
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let products = postprocess_detections(vec![RawDetection::new("egg", 0.5)], 0.5);
        assert_eq!(products.len(), 1);
    }

    #[test]
    fn test_dedup_keeps_highest_confidence() {
        let products = postprocess_detections(
            vec![
                RawDetection::new("tomato", 0.61),
                RawDetection::new("tomato", 0.87),
                RawDetection::new("tomato", 0.7),
            ],
            0.5,
        );
        assert_eq!(
            products,
            vec![DetectedProduct {
                name: "tomato".to_string(),
                confidence: 0.87
            }]
        );
    }

    #[test]
    fn test_sorted_by_confidence_desc() {
        let products = postprocess_detections(
            vec![
                RawDetection::new("cheese", 0.66),
                RawDetection::new("basil", 0.954),
                RawDetection::new("tomato", 0.8),
            ],
            0.5,
        );
        let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["basil", "tomato", "cheese"]);
        assert_eq!(products[0].confidence, 0.95);
    }

    #[test]
    fn test_nan_confidence_dropped() {
        let products = postprocess_detections(vec![RawDetection::new("egg", f32::NAN)], 0.0);
        assert!(products.is_empty());
    }
}
