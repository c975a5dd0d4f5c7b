use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::AppState;
use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use receptai_core::{is_allowed_content_type, validate_image, DetectedProduct, MAX_FILE_SIZE};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(ToSchema)]
#[allow(dead_code)]
pub struct DetectProductsRequest {
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}

/// OpenAPI-documented wire shape of [`DetectedProduct`]; `receptai-core` has no `utoipa` dependency.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DetectedProductResponse {
    pub name: String,
    /// Between 0 and 1, two decimals
    pub confidence: f32,
}

impl From<DetectedProduct> for DetectedProductResponse {
    fn from(p: DetectedProduct) -> Self {
        Self {
            name: p.name,
            confidence: p.confidence,
        }
    }
}

/// Reject uploads by declared type and size before looking at the bytes.
pub fn check_upload(content_type: Option<&str>, size: usize) -> Result<(), ApiError> {
    if !content_type.is_some_and(is_allowed_content_type) {
        return Err(ApiError::BadRequest(
            "Only JPEG, PNG and WebP images are supported".to_string(),
        ));
    }
    if size > MAX_FILE_SIZE {
        return Err(ApiError::BadRequest("File too large (max 10MB)".to_string()));
    }
    Ok(())
}

#[utoipa::path(
    post,
    path = "/detect-products",
    tag = "products",
    request_body(content_type = "multipart/form-data", content = DetectProductsRequest),
    responses(
        (status = 200, description = "Products found on the photo", body = Vec<DetectedProductResponse>),
        (status = 400, description = "Missing, unsupported or oversized image", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 502, description = "Detector unavailable", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn detect_products(
    AuthUser(user_id): AuthUser,
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let mut multipart = multipart.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let (content_type, data) = loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => return Err(ApiError::BadRequest("No file provided".to_string())),
            Err(e) => return Err(multipart_error(e.status(), e.body_text())),
        };

        if field.name() != Some("file") {
            continue;
        }

        let content_type = field.content_type().map(str::to_string);
        let data = field
            .bytes()
            .await
            .map_err(|e| multipart_error(e.status(), e.body_text()))?;
        break (content_type, data);
    };

    check_upload(content_type.as_deref(), data.len())?;

    validate_image(&data).map_err(|e| {
        tracing::debug!(error = %e, "Rejected upload");
        ApiError::BadRequest("Could not open image".to_string())
    })?;

    let products = state.detector.detect(&data).await?;

    tracing::info!(
        user_id,
        count = products.len(),
        detector = state.detector.detector_name(),
        "Detected products"
    );

    let response: Vec<DetectedProductResponse> = products.into_iter().map(Into::into).collect();
    Ok(Json(response))
}

fn multipart_error(status: StatusCode, body_text: String) -> ApiError {
    tracing::warn!("Multipart read error: {}", body_text);
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::BadRequest("File too large (max 10MB)".to_string())
    } else {
        ApiError::BadRequest(format!("Failed to read upload: {}", body_text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_upload_accepts_images() {
        assert!(check_upload(Some("image/jpeg"), 1024).is_ok());
        assert!(check_upload(Some("image/png"), MAX_FILE_SIZE).is_ok());
        assert!(check_upload(Some("image/webp"), 0).is_ok());
    }

    #[test]
    fn test_check_upload_rejects_type() {
        let err = check_upload(Some("application/pdf"), 10).unwrap_err();
        assert_eq!(err.to_string(), "Only JPEG, PNG and WebP images are supported");
        assert!(check_upload(None, 10).is_err());
    }

    #[test]
    fn test_check_upload_rejects_size() {
        let err = check_upload(Some("image/png"), MAX_FILE_SIZE + 1).unwrap_err();
        assert_eq!(err.to_string(), "File too large (max 10MB)");
    }
}
