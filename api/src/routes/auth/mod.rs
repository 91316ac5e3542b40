//! Authentication route handlers
//!
//! - `login`: credential verification and token issuance
//! - `contents`: introspection of a presented bearer token

pub mod contents;
pub mod login;

use std::sync::Arc;

use tg_core::repositories::CredentialStore;
use tg_core::services::auth::AuthService;
use tg_core::services::token::TokenService;

/// Shared application state handed to the route handlers
pub struct AppState<C: CredentialStore> {
    pub auth_service: Arc<AuthService<C>>,
    pub token_service: Arc<TokenService>,
}

impl<C: CredentialStore> Clone for AppState<C> {
    fn clone(&self) -> Self {
        Self {
            auth_service: Arc::clone(&self.auth_service),
            token_service: Arc::clone(&self.token_service),
        }
    }
}
