//! # TokenGate Core
//!
//! Core business logic and domain layer for the TokenGate backend.
//! This crate contains the domain entities, the token and authentication
//! services, repository interfaces, and error types.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::token::Claims;
pub use errors::{AuthError, DomainError, DomainResult, TokenError};
pub use repositories::{CredentialStore, MockCredentialStore, PermissiveCredentialStore};
pub use services::{AuthService, TokenService, TokenServiceConfig};
