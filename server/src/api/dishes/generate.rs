use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::error::{ApiError, ApiJson};
use crate::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use receptai_core::ai::generate_recipe;
use receptai_core::GeneratedRecipe;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct GenerateRecipeRequest {
    pub dish_title: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
}

/// OpenAPI-documented wire shape of [`GeneratedRecipe`]; `receptai-core` has no `utoipa` dependency.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecipeResponse {
    pub title: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub cooking_time: String,
    pub servings: String,
}

impl From<GeneratedRecipe> for RecipeResponse {
    fn from(r: GeneratedRecipe) -> Self {
        Self {
            title: r.title,
            ingredients: r.ingredients,
            steps: r.steps,
            cooking_time: r.cooking_time,
            servings: r.servings,
        }
    }
}

#[utoipa::path(
    post,
    path = "/generate-recipe",
    tag = "dishes",
    request_body(content = GenerateRecipeRequest, example = json!({"dish_title": "Омлет", "ingredients": ["яйцо", "молоко"]})),
    responses(
        (status = 200, description = "Generated recipe", body = RecipeResponse),
        (status = 400, description = "Missing dish title", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 502, description = "Recipe generation failed", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn generate(
    AuthUser(user_id): AuthUser,
    State(state): State<AppState>,
    ApiJson(request): ApiJson<GenerateRecipeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let dish_title = request.dish_title.trim();
    if dish_title.is_empty() {
        return Err(ApiError::BadRequest("Dish title cannot be empty".to_string()));
    }

    let recipe = generate_recipe(state.ai_client.as_ref(), dish_title, &request.ingredients).await?;

    tracing::info!(user_id, steps = recipe.steps.len(), "Generated recipe");

    Ok(Json(RecipeResponse::from(recipe)))
}
