//! Repository interfaces and in-process implementations.

pub mod credential;

pub use credential::{CredentialStore, MockCredentialStore, PermissiveCredentialStore};
