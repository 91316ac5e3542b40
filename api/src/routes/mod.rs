//! HTTP route handlers
//!
//! - `auth`: authentication and token introspection endpoints
//! - `health`: liveness endpoint

pub mod auth;
pub mod health;

pub use auth::AppState;
