use super::{normalize_email, Credentials, TokenResponse};
use crate::api::ErrorResponse;
use crate::auth::verify_password;
use crate::error::{ApiError, ApiJson};
use crate::get_conn;
use crate::models::User;
use crate::schema::users;
use crate::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use diesel::prelude::*;

const INVALID_CREDENTIALS: &str = "Incorrect email or password";

#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "auth",
    request_body(content = Credentials, example = json!({"email": "cook@example.com", "password": "secret1"})),
    responses(
        (status = 200, description = "Login successful", body = TokenResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse)
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<Credentials>,
) -> Result<impl IntoResponse, ApiError> {
    let email = normalize_email(&req.email);
    let mut conn = get_conn!(state.pool);

    let user: Option<User> = users::table
        .filter(users::email.eq(&email))
        .select(User::as_select())
        .first(&mut conn)
        .optional()?;

    let user = match user {
        Some(u) if verify_password(&req.password, &u.password_hash) => u,
        _ => return Err(invalid_credentials()),
    };

    let access_token = state.jwt.issue(user.id).map_err(|e| {
        tracing::error!(error = %e, "Failed to sign access token");
        ApiError::Internal("Failed to create session".to_string())
    })?;

    Ok(Json(TokenResponse::bearer(access_token)))
}

fn invalid_credentials() -> ApiError {
    // Same body for unknown email and wrong password
    ApiError::BadCredentials(INVALID_CREDENTIALS.to_string())
}
