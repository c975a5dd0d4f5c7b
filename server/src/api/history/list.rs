use super::HistoryEntryResponse;
use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::get_conn;
use crate::schema::{cooking_history, dishes};
use crate::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// The user's cooked dishes, most recent first; same-instant entries by id, newest first.
pub fn load_history(conn: &mut PgConnection, user_id: i32) -> QueryResult<Vec<HistoryEntryResponse>> {
    let rows: Vec<(i32, i32, String, DateTime<Utc>)> = cooking_history::table
        .inner_join(dishes::table)
        .filter(cooking_history::user_id.eq(user_id))
        .order((cooking_history::cooked_at.desc(), cooking_history::id.desc()))
        .select((
            cooking_history::id,
            cooking_history::dish_id,
            dishes::title,
            cooking_history::cooked_at,
        ))
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(|(id, dish_id, dish_title, cooked_at)| HistoryEntryResponse {
            id,
            dish_id,
            dish_title,
            cooked_at,
        })
        .collect())
}

#[utoipa::path(
    get,
    path = "/history",
    tag = "history",
    responses(
        (status = 200, description = "Cooked dishes, most recent first", body = Vec<HistoryEntryResponse>),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_history(
    AuthUser(user_id): AuthUser,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let mut conn = get_conn!(state.pool);

    Ok(Json(load_history(&mut conn, user_id)?))
}
