//! Application factory
//!
//! Builds the Actix application with its routes and middleware; the binary
//! and the integration tests share this factory.

use actix_web::{middleware::Logger, web, App, HttpResponse};

use tg_core::repositories::CredentialStore;

use crate::middleware::{cors::create_cors, security::SecurityHeaders};
use crate::routes::auth::{contents::contents, login::login};
use crate::routes::health::health;

pub use crate::routes::auth::AppState;

/// Create and configure the application with all dependencies
pub fn create_app<C>(
    state: AppState<C>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    C: CredentialStore + 'static,
{
    let cors = create_cors();
    let security = SecurityHeaders::new();

    App::new()
        // Add application state
        .app_data(web::Data::new(state))
        // Add middleware (order matters: security first, then CORS, then logging)
        .wrap(Logger::default())
        .wrap(cors)
        .wrap(security)
        // Health check endpoint (the original service answered both verbs)
        .route("/", web::get().to(health))
        .route("/", web::post().to(health))
        // Authentication endpoints
        .route("/auth", web::post().to(login::<C>))
        .route("/contents", web::get().to(contents::<C>))
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
