pub mod create;
pub mod list;

use crate::AppState;
use axum::routing::get;
use axum::Router;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

/// Returns the router for the cooking history
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/history",
        get(list::list_history).post(create::create_history_entry),
    )
}

/// A dish the user cooked.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HistoryEntryResponse {
    pub id: i32,
    pub dish_id: i32,
    pub dish_title: String,
    pub cooked_at: DateTime<Utc>,
}

#[derive(OpenApi)]
#[openapi(
    paths(list::list_history, create::create_history_entry),
    components(schemas(HistoryEntryResponse, create::CreateHistoryRequest))
)]
pub struct ApiDoc;
