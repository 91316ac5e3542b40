//! Mock implementation of CredentialStore for testing

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use constant_time_eq::constant_time_eq;
use tokio::sync::RwLock;

use crate::errors::DomainError;

use super::trait_::CredentialStore;

/// Mock credential store for testing
pub struct MockCredentialStore {
    users: Arc<RwLock<HashMap<String, String>>>,
}

impl MockCredentialStore {
    /// Create an empty mock store
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a mock store seeded with a single account
    pub fn with_user(email: impl Into<String>, password: impl Into<String>) -> Self {
        let mut users = HashMap::new();
        users.insert(email.into(), password.into());
        Self {
            users: Arc::new(RwLock::new(users)),
        }
    }

    /// Add or replace an account
    pub async fn insert(&self, email: impl Into<String>, password: impl Into<String>) {
        let mut users = self.users.write().await;
        users.insert(email.into(), password.into());
    }
}

impl Default for MockCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialStore for MockCredentialStore {
    async fn verify_credentials(&self, email: &str, password: &str) -> Result<bool, DomainError> {
        let users = self.users.read().await;
        match users.get(email) {
            Some(stored) => {
                if stored.len() != password.len() {
                    return Ok(false);
                }
                // Constant-time comparison, like a real store would use
                Ok(constant_time_eq(stored.as_bytes(), password.as_bytes()))
            }
            None => Ok(false),
        }
    }
}
