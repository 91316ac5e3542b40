//! Login endpoint issuing signed tokens

use actix_web::{web, HttpResponse};
use validator::Validate;

use tg_core::repositories::CredentialStore;

use crate::dto::auth::{AuthRequest, TokenResponse};
use crate::handlers::error::{domain_error_response, validation_error_response};

use super::AppState;

/// Handler for POST /auth
///
/// Verifies the submitted credentials and returns a signed token.
///
/// # Request Body
///
/// ```json
/// {
///     "email": "user@example.com",
///     "password": "secret"
/// }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "token": "eyJ0eXAiOiJKV1QiLCJhbGciOiJIUzI1NiJ9..."
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: malformed or incomplete request body
/// - 401 Unauthorized: credentials rejected; the body never says which
///   field was wrong
/// - 500 Internal Server Error: token issuance failure
pub async fn login<C>(
    state: web::Data<AppState<C>>,
    request: web::Json<AuthRequest>,
) -> HttpResponse
where
    C: CredentialStore + 'static,
{
    // Validate request shape before touching the credential store
    if request.validate().is_err() {
        return validation_error_response();
    }

    match state
        .auth_service
        .authenticate(&request.email, &request.password)
        .await
    {
        Ok(token) => HttpResponse::Ok().json(TokenResponse { token }),
        Err(error) => domain_error_response(error),
    }
}
