use super::{normalize_email, validate_credentials, Credentials, TokenResponse};
use crate::api::ErrorResponse;
use crate::auth::hash_password;
use crate::error::{ApiError, ApiJson};
use crate::get_conn;
use crate::models::NewUser;
use crate::schema::users;
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

#[utoipa::path(
    post,
    path = "/auth/register",
    tag = "auth",
    request_body(content = Credentials, example = json!({"email": "cook@example.com", "password": "secret1"})),
    responses(
        (status = 201, description = "User created", body = TokenResponse),
        (status = 400, description = "Invalid email or password", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse)
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<Credentials>,
) -> Result<impl IntoResponse, ApiError> {
    let email = normalize_email(&req.email);
    validate_credentials(&email, &req.password)?;

    let password_hash = hash_password(&req.password).map_err(|e| {
        tracing::error!(error = %e, "Failed to hash password");
        ApiError::Internal("Failed to create user".to_string())
    })?;

    let mut conn = get_conn!(state.pool);

    let new_user = NewUser {
        email: &email,
        password_hash: &password_hash,
    };

    let user_id: i32 = diesel::insert_into(users::table)
        .values(&new_user)
        .returning(users::id)
        .get_result(&mut conn)
        .map_err(|e| match e {
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                ApiError::Conflict("User with this email already exists".to_string())
            }
            other => other.into(),
        })?;

    let access_token = state.jwt.issue(user_id).map_err(|e| {
        tracing::error!(error = %e, "Failed to sign access token");
        ApiError::Internal("Failed to create session".to_string())
    })?;

    tracing::info!(user_id, "Registered new user");

    Ok((StatusCode::CREATED, Json(TokenResponse::bearer(access_token))))
}
