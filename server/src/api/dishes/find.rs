use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::catalog::load_catalog;
use crate::error::{ApiError, ApiJson};
use crate::get_conn;
use crate::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use receptai_core::{find_matches, MatchResult, DEFAULT_MAX_MISSING};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct FindDishesRequest {
    /// Products the user has, any casing
    pub ingredients: Vec<String>,
}

/// OpenAPI-documented wire shape of [`MatchResult`]; `receptai-core` has no `utoipa` dependency.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DishMatch {
    pub id: i32,
    pub title: String,
    pub difficulty: String,
    pub missing_count: usize,
    pub missing_ingredients: Vec<String>,
}

impl From<MatchResult> for DishMatch {
    fn from(m: MatchResult) -> Self {
        Self {
            id: m.id,
            title: m.title,
            difficulty: m.difficulty,
            missing_count: m.missing_count,
            missing_ingredients: m.missing_ingredients,
        }
    }
}

#[utoipa::path(
    post,
    path = "/dishes/find",
    tag = "dishes",
    request_body(content = FindDishesRequest, example = json!({"ingredients": ["egg", "milk", "salt"]})),
    responses(
        (status = 200, description = "Dishes missing at most two ingredients, best first", body = Vec<DishMatch>),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn find_dishes(
    AuthUser(user_id): AuthUser,
    State(state): State<AppState>,
    ApiJson(request): ApiJson<FindDishesRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let mut conn = get_conn!(state.pool);
    let catalog = load_catalog(&mut conn)?;

    let matches = find_matches(&request.ingredients, &catalog, DEFAULT_MAX_MISSING);

    tracing::debug!(
        user_id,
        catalog_size = catalog.len(),
        count = matches.len(),
        "Matched dishes"
    );

    let response: Vec<DishMatch> = matches.into_iter().map(Into::into).collect();
    Ok(Json(response))
}
