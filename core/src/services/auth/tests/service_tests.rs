//! Unit tests for the authentication service

use std::sync::Arc;

use chrono::{TimeZone, Utc};

use crate::errors::{AuthError, DomainError};
use crate::repositories::{MockCredentialStore, PermissiveCredentialStore};
use crate::services::auth::AuthService;
use crate::services::token::{TokenService, TokenServiceConfig};

fn token_service() -> Arc<TokenService> {
    Arc::new(
        TokenService::new(TokenServiceConfig::new("test-secret").with_validity_seconds(3600))
            .expect("failed to create token service"),
    )
}

fn expect_invalid_credentials(result: Result<String, DomainError>) {
    match result {
        Err(DomainError::Auth(AuthError::InvalidCredentials)) => {}
        other => panic!("expected invalid credentials, got {:?}", other),
    }
}

#[tokio::test]
async fn test_authenticate_issues_verifiable_token() {
    let store = Arc::new(MockCredentialStore::with_user("user@example.com", "mypwd"));
    let tokens = token_service();
    let service = AuthService::new(store, tokens.clone());

    let now = Utc.timestamp_opt(1_699_205_530, 0).unwrap();
    let token = service
        .authenticate_at("user@example.com", "mypwd", now)
        .await
        .unwrap();

    let claims = tokens.verify_at(&token, now).unwrap();
    assert_eq!(claims.email, "user@example.com");
    assert_eq!(claims.nbf, now.timestamp());
    assert_eq!(claims.exp - claims.nbf, 3600);
}

#[tokio::test]
async fn test_wrong_password_is_rejected_without_issuing() {
    let store = Arc::new(MockCredentialStore::with_user("user@example.com", "mypwd"));
    let service = AuthService::new(store, token_service());

    expect_invalid_credentials(service.authenticate("user@example.com", "wrong").await);
}

#[tokio::test]
async fn test_unknown_user_is_rejected() {
    let store = Arc::new(MockCredentialStore::new());
    let service = AuthService::new(store, token_service());

    expect_invalid_credentials(service.authenticate("nobody@example.com", "mypwd").await);
}

#[tokio::test]
async fn test_permissive_store_accepts_any_well_formed_pair() {
    let service = AuthService::new(Arc::new(PermissiveCredentialStore::new()), token_service());

    assert!(service.authenticate("quyetcv1@fpt.com", "mypwd").await.is_ok());
}

#[tokio::test]
async fn test_permissive_store_still_rejects_blank_fields() {
    let service = AuthService::new(Arc::new(PermissiveCredentialStore::new()), token_service());

    expect_invalid_credentials(service.authenticate("", "mypwd").await);
    expect_invalid_credentials(service.authenticate("quyetcv1@fpt.com", "").await);
}
