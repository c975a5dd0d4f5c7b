pub mod find;
pub mod generate;

use crate::AppState;
use axum::routing::post;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for dish matching and recipe generation
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/dishes/find", post(find::find_dishes))
        .route("/generate-recipe", post(generate::generate))
}

#[derive(OpenApi)]
#[openapi(
    paths(find::find_dishes, generate::generate),
    components(schemas(
        find::FindDishesRequest,
        find::DishMatch,
        generate::GenerateRecipeRequest,
        generate::RecipeResponse,
    ))
)]
pub struct ApiDoc;
