//! Token introspection endpoint

use actix_web::{http::header, web, HttpRequest, HttpResponse};

use tg_core::repositories::CredentialStore;

use crate::dto::auth::ClaimsResponse;
use crate::handlers::error::{domain_error_response, missing_token_response};

use super::AppState;

/// Handler for GET /contents
///
/// Decodes the claims of the bearer token presented in the Authorization
/// header.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "email": "user@example.com",
///     "exp": 1700415130,
///     "nbf": 1699205530
/// }
/// ```
///
/// ## Errors
/// - 401 Unauthorized: header missing, not a bearer token, or the token
///   failed verification
pub async fn contents<C>(req: HttpRequest, state: web::Data<AppState<C>>) -> HttpResponse
where
    C: CredentialStore + 'static,
{
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    let token = match token {
        Some(token) => token,
        None => return missing_token_response(),
    };

    match state.token_service.verify(token) {
        Ok(claims) => HttpResponse::Ok().json(ClaimsResponse {
            email: claims.email,
            exp: claims.exp,
            nbf: claims.nbf,
        }),
        Err(error) => domain_error_response(error),
    }
}
