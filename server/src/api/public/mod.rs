pub mod auth;
pub mod root;
pub mod testing;

use crate::AppState;
use axum::routing::{get, post};
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for public endpoints (no auth required)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root::root))
        .route(
            "/api/test/unauthed-ping",
            get(testing::unauthed_ping::unauthed_ping),
        )
        .route("/auth/register", post(auth::register::register))
        .route("/auth/login", post(auth::login::login))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        root::root,
        auth::login::login,
        auth::register::register,
        testing::unauthed_ping::unauthed_ping,
    ),
    components(schemas(
        root::RootResponse,
        auth::Credentials,
        auth::TokenResponse,
        testing::unauthed_ping::UnauthedPingResponse,
    ))
)]
pub struct ApiDoc;
