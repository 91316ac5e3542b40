//! Integration tests for the authentication endpoint

use std::sync::Arc;

use actix_web::{http::StatusCode, test};

use tg_api::app::{create_app, AppState};
use tg_api::dto::auth::{AuthRequest, TokenResponse};
use tg_core::repositories::{MockCredentialStore, PermissiveCredentialStore};
use tg_core::services::auth::AuthService;
use tg_core::services::token::{TokenService, TokenServiceConfig};

const SECRET: &str = "quyetc1-secret";

fn token_service() -> Arc<TokenService> {
    Arc::new(
        TokenService::new(TokenServiceConfig::new(SECRET).with_validity_seconds(12_600))
            .expect("failed to create token service"),
    )
}

fn permissive_state() -> AppState<PermissiveCredentialStore> {
    let token_service = token_service();
    AppState {
        auth_service: Arc::new(AuthService::new(
            Arc::new(PermissiveCredentialStore::new()),
            token_service.clone(),
        )),
        token_service,
    }
}

fn strict_state() -> AppState<MockCredentialStore> {
    let token_service = token_service();
    AppState {
        auth_service: Arc::new(AuthService::new(
            Arc::new(MockCredentialStore::with_user("quyetcv1@fpt.com", "mypwd")),
            token_service.clone(),
        )),
        token_service,
    }
}

#[actix_web::test]
async fn test_login_returns_token_for_valid_credentials() {
    let state = permissive_state();
    let token_service = state.token_service.clone();
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/auth")
        .set_json(AuthRequest {
            email: "quyetcv1@fpt.com".to_string(),
            password: "mypwd".to_string(),
        })
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: TokenResponse = test::read_body_json(resp).await;
    assert!(!body.token.is_empty());
    assert_eq!(body.token.split('.').count(), 3);

    // The issued token verifies and carries the submitted email
    let claims = token_service
        .verify(&body.token)
        .expect("issued token must verify");
    assert_eq!(claims.email, "quyetcv1@fpt.com");
    assert_eq!(claims.validity_seconds(), 12_600);
}

#[actix_web::test]
async fn test_login_rejects_bad_credentials_with_generic_body() {
    let app = test::init_service(create_app(strict_state())).await;

    let req = test::TestRequest::post()
        .uri("/auth")
        .set_json(AuthRequest {
            email: "quyetcv1@fpt.com".to_string(),
            password: "wrong-password".to_string(),
        })
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_credentials");
    // The body names neither field
    let message = body["message"].as_str().unwrap().to_lowercase();
    assert!(!message.contains("password field"));
    assert_eq!(message, "invalid email or password");
}

#[actix_web::test]
async fn test_login_rejects_unknown_user() {
    let app = test::init_service(create_app(strict_state())).await;

    let req = test::TestRequest::post()
        .uri("/auth")
        .set_json(AuthRequest {
            email: "nobody@example.com".to_string(),
            password: "mypwd".to_string(),
        })
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_login_rejects_incomplete_body() {
    let app = test::init_service(create_app(permissive_state())).await;

    let req = test::TestRequest::post()
        .uri("/auth")
        .insert_header(("content-type", "application/json"))
        .set_payload(r#"{"email": "quyetcv1@fpt.com"}"#)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_login_rejects_malformed_email() {
    let app = test::init_service(create_app(permissive_state())).await;

    let req = test::TestRequest::post()
        .uri("/auth")
        .set_json(AuthRequest {
            email: "not-an-email".to_string(),
            password: "mypwd".to_string(),
        })
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "validation_error");
}
