//! Request and response bodies for the authentication endpoints

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Credential pair submitted to POST /auth
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AuthRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Token issued after successful authentication
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Claims of an introspected token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimsResponse {
    pub email: String,
    pub exp: i64,
    pub nbf: i64,
}
