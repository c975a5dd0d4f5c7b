pub mod detect;

use crate::AppState;
use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;
use receptai_core::MAX_FILE_SIZE;
use utoipa::OpenApi;

/// Room for multipart framing on top of the file itself, so an oversized file
/// reaches the handler and gets a readable 400 instead of a bare 413.
const MULTIPART_OVERHEAD: usize = 1024 * 1024;

/// Returns the router for product detection
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/detect-products",
        post(detect::detect_products).layer(DefaultBodyLimit::max(MAX_FILE_SIZE + MULTIPART_OVERHEAD)),
    )
}

#[derive(OpenApi)]
#[openapi(
    paths(detect::detect_products),
    components(schemas(detect::DetectProductsRequest, detect::DetectedProductResponse))
)]
pub struct ApiDoc;
