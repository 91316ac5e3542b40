//! Mapping of domain errors onto HTTP responses

use actix_web::HttpResponse;
use log::error;

use tg_core::errors::{AuthError, DomainError, TokenError};
use tg_shared::types::ErrorResponse;

/// Convert a domain error into an HTTP response.
///
/// Credential and token failures map to 401 with generic bodies; the
/// response never distinguishes which verification step failed.
pub fn domain_error_response(err: DomainError) -> HttpResponse {
    match err {
        DomainError::Auth(AuthError::InvalidCredentials) => HttpResponse::Unauthorized().json(
            ErrorResponse::new("invalid_credentials", "Invalid email or password"),
        ),
        DomainError::Token(TokenError::InvalidToken) => HttpResponse::Unauthorized()
            .json(ErrorResponse::new("invalid_token", "Invalid token")),
        DomainError::Validation { .. } => HttpResponse::BadRequest()
            .json(ErrorResponse::new("validation_error", "Invalid request data")),
        DomainError::Config(_) | DomainError::Internal { .. } => {
            error!("internal error: {:?}", err);
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                "internal_error",
                "An internal error occurred",
            ))
        }
    }
}

/// Response for requests with an invalid body shape
pub fn validation_error_response() -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse::new(
        "validation_error",
        "Invalid request data",
    ))
}

/// Response for introspection requests without a usable bearer token.
///
/// Identical to the invalid-token body so a missing header is
/// indistinguishable from a rejected token.
pub fn missing_token_response() -> HttpResponse {
    HttpResponse::Unauthorized().json(ErrorResponse::new("invalid_token", "Invalid token"))
}
