mod crypto;
mod extractor;
mod jwt;

pub use crypto::{hash_password, verify_password};
pub use extractor::AuthUser;
pub use jwt::JwtKeys;
