//! Authentication service implementation

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::errors::{AuthError, DomainResult};
use crate::repositories::CredentialStore;
use crate::services::token::TokenService;

/// Service authenticating credential pairs and issuing tokens
pub struct AuthService<C: CredentialStore> {
    credentials: Arc<C>,
    token_service: Arc<TokenService>,
}

impl<C: CredentialStore> AuthService<C> {
    /// Creates a new authentication service
    ///
    /// # Arguments
    ///
    /// * `credentials` - Store deciding whether a credential pair is valid
    /// * `token_service` - Service used to sign tokens for accepted users
    pub fn new(credentials: Arc<C>, token_service: Arc<TokenService>) -> Self {
        Self {
            credentials,
            token_service,
        }
    }

    /// Authenticates a credential pair and issues a token using the current time
    pub async fn authenticate(&self, email: &str, password: &str) -> DomainResult<String> {
        self.authenticate_at(email, password, Utc::now()).await
    }

    /// Authenticates a credential pair and issues a token anchored at `now`.
    ///
    /// The token service is never invoked for rejected credentials, and the
    /// returned error does not say which field was wrong. Credentials are
    /// not logged.
    pub async fn authenticate_at(
        &self,
        email: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> DomainResult<String> {
        let accepted = self.credentials.verify_credentials(email, password).await?;
        if !accepted {
            tracing::info!(event = "auth_rejected", "credential verification failed");
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.token_service.issue_at(email, now)?;
        tracing::info!(event = "auth_accepted", "issued token");
        Ok(token)
    }
}
