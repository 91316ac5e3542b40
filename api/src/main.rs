use std::sync::Arc;

use actix_web::HttpServer;
use anyhow::Context;
use log::info;

use tg_api::app::{create_app, AppState};
use tg_core::repositories::PermissiveCredentialStore;
use tg_core::services::auth::AuthService;
use tg_core::services::token::{TokenService, TokenServiceConfig};
use tg_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // A missing or empty JWT secret aborts startup here
    let config = AppConfig::from_env().context("failed to load configuration")?;

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or(config.logging.level.as_str()));

    info!("Starting TokenGate API server ({})", config.environment);

    let token_config = TokenServiceConfig::new(&config.auth.jwt.secret)
        .with_validity_seconds(config.auth.jwt.token_expiry);
    let token_service =
        Arc::new(TokenService::new(token_config).context("failed to create token service")?);

    let credential_store = Arc::new(PermissiveCredentialStore::new());
    let auth_service = Arc::new(AuthService::new(credential_store, token_service.clone()));

    let state = AppState {
        auth_service,
        token_service,
    };

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    HttpServer::new(move || create_app(state.clone()))
        .bind(&bind_address)?
        .run()
        .await?;

    Ok(())
}
