//! Permissive credential store accepting any well-formed credential pair.

use async_trait::async_trait;

use tg_shared::utils::validation;

use crate::errors::DomainError;

use super::trait_::CredentialStore;

/// Credential store that accepts any well-formed email/password pair.
///
/// This mirrors the original deployment, which had no user database and
/// issued a token to anyone presenting credentials. Production deployments
/// replace it with an implementation backed by a real user store.
pub struct PermissiveCredentialStore;

impl PermissiveCredentialStore {
    /// Create a new permissive store
    pub fn new() -> Self {
        Self
    }
}

impl Default for PermissiveCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialStore for PermissiveCredentialStore {
    async fn verify_credentials(&self, email: &str, password: &str) -> Result<bool, DomainError> {
        Ok(validation::not_empty(email)
            && validation::not_empty(password)
            && validation::is_valid_email(email))
    }
}
