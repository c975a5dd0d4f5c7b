pub mod login;
pub mod register;

use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const EMAIL_LENGTH: std::ops::RangeInclusive<usize> = 5..=100;
pub const PASSWORD_LENGTH: std::ops::RangeInclusive<usize> = 6..=100;

/// Body of both register and login.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

impl TokenResponse {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}

/// Emails are compared case-insensitively and stored lowercased.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

pub fn validate_credentials(email: &str, password: &str) -> Result<(), ApiError> {
    if !EMAIL_LENGTH.contains(&email.chars().count()) || !email.contains('@') {
        return Err(ApiError::BadRequest("Invalid email address".to_string()));
    }
    if !PASSWORD_LENGTH.contains(&password.chars().count()) {
        return Err(ApiError::BadRequest(
            "Password must be between 6 and 100 characters".to_string(),
        ));
    }
    Ok(())
}
