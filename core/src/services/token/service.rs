//! Main token service implementation

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use tg_shared::errors::ConfigError;

use crate::domain::entities::token::Claims;
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// Service issuing and verifying signed tokens.
///
/// The service is stateless: both operations are functions of their
/// arguments and the immutable configuration captured at construction, so a
/// single instance can be shared across worker threads without locking.
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `config` - Token service configuration carrying the signing secret
    ///
    /// # Returns
    ///
    /// A new `TokenService`, or a configuration error when the secret is
    /// empty or the validity window is negative
    pub fn new(config: TokenServiceConfig) -> Result<Self, DomainError> {
        if config.jwt_secret.is_empty() {
            return Err(ConfigError::EmptySecret.into());
        }
        if config.token_validity_seconds < 0 {
            return Err(ConfigError::InvalidVar {
                name: "TOKEN_EXPIRY_SECONDS".to_string(),
                message: "validity window must not be negative".to_string(),
            }
            .into());
        }

        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        // The validity window is enforced below against a caller-supplied
        // clock, with inclusive bounds and zero leeway; the crate's own
        // wall-clock checks stay disabled.
        let mut validation = Validation::new(config.algorithm);
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();
        validation.leeway = 0;

        Ok(Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        })
    }

    /// Issues a token for `email` using the current time
    pub fn issue(&self, email: &str) -> Result<String, DomainError> {
        self.issue_at(email, Utc::now())
    }

    /// Issues a token for `email` with `nbf = now` and
    /// `exp = now + validity window`.
    ///
    /// Identical inputs produce byte-identical tokens: the payload carries
    /// no nonce and the claims serialize in a fixed field order.
    pub fn issue_at(&self, email: &str, now: DateTime<Utc>) -> Result<String, DomainError> {
        let claims = Claims::new(
            email,
            now,
            Duration::seconds(self.config.token_validity_seconds),
        );
        let header = Header::new(self.config.algorithm);
        encode(&header, &claims, &self.encoding_key).map_err(|e| DomainError::Internal {
            message: format!("failed to encode token: {}", e),
        })
    }

    /// Verifies a token against the current time
    pub fn verify(&self, token: &str) -> Result<Claims, DomainError> {
        self.verify_at(token, Utc::now())
    }

    /// Verifies `token` at the instant `now` and returns its claims.
    ///
    /// The signature is checked before the payload is trusted (the HMAC
    /// comparison inside the jsonwebtoken crate is constant-time), then the
    /// payload is parsed into the typed [`Claims`] and the validity window
    /// is enforced as `nbf <= now <= exp`. Every failure (wrong shape, bad
    /// signature, malformed payload, outside the window) surfaces as the
    /// single [`TokenError::InvalidToken`] kind; the concrete cause is only
    /// logged at debug level.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, DomainError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            tracing::debug!(error = %e, "token rejected");
            TokenError::InvalidToken
        })?;

        let claims = data.claims;
        if !claims.is_valid_at(now.timestamp()) {
            tracing::debug!(
                now = now.timestamp(),
                nbf = claims.nbf,
                exp = claims.exp,
                "token outside validity window"
            );
            return Err(TokenError::InvalidToken.into());
        }

        Ok(claims)
    }

    /// Validity window stamped into issued tokens, in seconds
    pub fn validity_seconds(&self) -> i64 {
        self.config.token_validity_seconds
    }
}
