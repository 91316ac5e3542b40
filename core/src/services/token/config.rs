//! Configuration for the token service

use jsonwebtoken::Algorithm;

use tg_shared::config::auth::DEFAULT_TOKEN_EXPIRY_SECONDS;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// JWT signing algorithm
    pub algorithm: Algorithm,
    /// Token validity window in seconds (`exp - nbf`)
    pub token_validity_seconds: i64,
}

impl TokenServiceConfig {
    /// Create a configuration with the given secret and the default window
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: secret.into(),
            algorithm: Algorithm::HS256,
            token_validity_seconds: DEFAULT_TOKEN_EXPIRY_SECONDS,
        }
    }

    /// Set the validity window in seconds
    pub fn with_validity_seconds(mut self, seconds: i64) -> Self {
        self.token_validity_seconds = seconds;
        self
    }
}
