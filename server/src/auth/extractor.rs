use crate::error::ApiError;
use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts},
};

use super::JwtKeys;

/// Extractor that validates the bearer token and provides the user id.
///
/// Every failure (missing header, wrong scheme, bad signature, expiry, bad
/// subject) is rejected with the same 401; the reason is only logged.
/// ```ignore
/// async fn my_handler(AuthUser(user_id): AuthUser) -> impl IntoResponse {
///     // user_id is the authenticated user's id
/// }
/// ```
pub struct AuthUser(pub i32);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    crate::AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = crate::AppState::from_ref(state);
        authenticate(&state.jwt, parts).map(AuthUser)
    }
}

fn authenticate(keys: &JwtKeys, parts: &Parts) -> Result<i32, ApiError> {
    let auth_header = parts.headers.get(header::AUTHORIZATION).ok_or_else(|| {
        tracing::debug!("Missing Authorization header");
        ApiError::Unauthorized
    })?;

    let auth_str = auth_header.to_str().map_err(|_| {
        tracing::debug!("Authorization header is not valid ASCII");
        ApiError::Unauthorized
    })?;

    let token = auth_str.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::debug!("Authorization header is not a bearer token");
        ApiError::Unauthorized
    })?;

    let claims = keys.verify(token).map_err(|e| {
        tracing::debug!(error = %e, "Rejected access token");
        ApiError::Unauthorized
    })?;

    claims.user_id().ok_or_else(|| {
        tracing::debug!(sub = %claims.sub, "Token subject is not a user id");
        ApiError::Unauthorized
    })
}
