//! Authentication and JWT signing configuration

use std::env;

use crate::errors::ConfigError;

/// Environment variable holding the HMAC signing secret
pub const JWT_SECRET_VAR: &str = "JWT_SECRET";

/// Environment variable overriding the token validity window
pub const TOKEN_EXPIRY_VAR: &str = "TOKEN_EXPIRY_SECONDS";

/// Default token validity window in seconds (14 days)
pub const DEFAULT_TOKEN_EXPIRY_SECONDS: i64 = 14 * 24 * 60 * 60;

/// JWT signing configuration
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Symmetric secret used to sign and verify tokens
    pub secret: String,

    /// Token validity window in seconds
    pub token_expiry: i64,
}

impl JwtConfig {
    /// Create a new JWT configuration with the given secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            token_expiry: DEFAULT_TOKEN_EXPIRY_SECONDS,
        }
    }

    /// Set the token validity window in seconds
    pub fn with_expiry_seconds(mut self, seconds: i64) -> Self {
        self.token_expiry = seconds;
        self
    }

    /// Load the JWT configuration from the environment.
    ///
    /// The secret is required: a missing or empty `JWT_SECRET` is a startup
    /// failure, never a silent default.
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret = env::var(JWT_SECRET_VAR).map_err(|_| ConfigError::MissingVar {
            name: JWT_SECRET_VAR.to_string(),
        })?;
        if secret.trim().is_empty() {
            return Err(ConfigError::EmptyVar {
                name: JWT_SECRET_VAR.to_string(),
            });
        }

        let token_expiry = match env::var(TOKEN_EXPIRY_VAR) {
            Ok(raw) => raw
                .parse::<i64>()
                .ok()
                .filter(|seconds| *seconds >= 0)
                .ok_or_else(|| ConfigError::InvalidVar {
                    name: TOKEN_EXPIRY_VAR.to_string(),
                    message: "expected a non-negative integer number of seconds".to_string(),
                })?,
            Err(_) => DEFAULT_TOKEN_EXPIRY_SECONDS,
        };

        Ok(Self {
            secret,
            token_expiry,
        })
    }
}

/// Authentication configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// JWT signing configuration
    pub jwt: JwtConfig,
}

impl AuthConfig {
    /// Load the authentication configuration from the environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            jwt: JwtConfig::from_env()?,
        })
    }
}
