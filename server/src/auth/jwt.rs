//! HS256 access tokens.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// User id
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn user_id(&self) -> Option<i32> {
        self.sub.parse().ok()
    }
}

/// Signing and verification keys derived from `SECRET_KEY`.
#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl std::fmt::Debug for JwtKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtKeys")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl JwtKeys {
    pub fn new(secret: &str, ttl_minutes: i64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl: Duration::minutes(ttl_minutes),
        }
    }

    pub fn issue(&self, user_id: i32) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
    }

    pub fn verify(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        decode::<Claims>(token, &self.decoding, &self.validation).map(|data| data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let keys = JwtKeys::new("secret", 60);
        let token = keys.issue(42).unwrap();
        let claims = keys.verify(&token).unwrap();

        assert_eq!(claims.user_id(), Some(42));
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_expired_token_rejected() {
        let keys = JwtKeys::new("secret", -5);
        let token = keys.issue(1).unwrap();
        assert!(keys.verify(&token).is_err());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = JwtKeys::new("secret", 60).issue(1).unwrap();
        assert!(JwtKeys::new("other", 60).verify(&token).is_err());
    }

    #[test]
    fn test_tampered_token_rejected() {
        let keys = JwtKeys::new("secret", 60);
        let victim = keys.issue(1).unwrap();
        let other = keys.issue(2).unwrap();

        // Signature of user 1 with the claims of user 2
        let victim_parts: Vec<&str> = victim.split('.').collect();
        let other_parts: Vec<&str> = other.split('.').collect();
        let tampered = format!("{}.{}.{}", victim_parts[0], other_parts[1], victim_parts[2]);

        assert!(keys.verify(&tampered).is_err());
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(JwtKeys::new("secret", 60).verify("not.a.token").is_err());
    }
}
