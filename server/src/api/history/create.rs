use super::HistoryEntryResponse;
use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::error::{ApiError, ApiJson};
use crate::get_conn;
use crate::models::{HistoryEntry, NewHistoryEntry};
use crate::schema::{cooking_history, dishes};
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateHistoryRequest {
    pub dish_id: i32,
}

fn dish_not_found() -> ApiError {
    ApiError::NotFound("Dish not found".to_string())
}

/// Record that `user_id` cooked `dish_id`.
///
/// A dish that does not exist, or disappears before the insert lands, is a 404.
pub fn record_cooked_dish(
    conn: &mut PgConnection,
    user_id: i32,
    dish_id: i32,
) -> Result<HistoryEntryResponse, ApiError> {
    conn.transaction(|conn| {
        let entry: HistoryEntry = diesel::insert_into(cooking_history::table)
            .values(NewHistoryEntry { user_id, dish_id })
            .returning(HistoryEntry::as_returning())
            .get_result(conn)
            .map_err(|e| match e {
                DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
                    dish_not_found()
                }
                other => other.into(),
            })?;

        let dish_title: String = dishes::table
            .find(entry.dish_id)
            .select(dishes::title)
            .first(conn)
            .optional()?
            .ok_or_else(dish_not_found)?;

        Ok(HistoryEntryResponse {
            id: entry.id,
            dish_id: entry.dish_id,
            dish_title,
            cooked_at: entry.cooked_at,
        })
    })
}

#[utoipa::path(
    post,
    path = "/history",
    tag = "history",
    request_body = CreateHistoryRequest,
    responses(
        (status = 201, description = "Dish marked as cooked", body = HistoryEntryResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Dish not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_history_entry(
    AuthUser(user_id): AuthUser,
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateHistoryRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let mut conn = get_conn!(state.pool);

    let entry = record_cooked_dish(&mut conn, user_id, request.dish_id)?;

    tracing::info!(user_id, dish_id = entry.dish_id, "Recorded cooked dish");

    Ok((StatusCode::CREATED, Json(entry)))
}
