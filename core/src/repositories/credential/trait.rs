//! Credential store trait defining the interface for credential checks.

use async_trait::async_trait;

use crate::errors::DomainError;

/// Repository trait for verifying user credentials
///
/// Implementations decide what a valid credential pair is: a database of
/// password hashes, an upstream identity provider, or a permissive store for
/// development. The core only consumes the boolean outcome, so no credential
/// material crosses back into the domain layer.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Check whether the supplied email/password pair is valid
    ///
    /// # Arguments
    /// * `email` - The subject identifier presented by the client
    /// * `password` - The password presented by the client
    ///
    /// # Returns
    /// * `Ok(true)` - Credentials verified
    /// * `Ok(false)` - Credentials rejected
    /// * `Err(DomainError)` - The store itself failed
    async fn verify_credentials(&self, email: &str, password: &str) -> Result<bool, DomainError>;
}
