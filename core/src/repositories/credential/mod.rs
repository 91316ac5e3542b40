//! Credential store abstraction for authenticating users.
//!
//! The token core never owns user persistence; callers supply an
//! implementation of [`CredentialStore`] backed by whatever user store the
//! deployment uses.

pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;

pub mod mock;
pub mod permissive;


pub use mock::MockCredentialStore;
pub use permissive::PermissiveCredentialStore;
pub use r#trait::CredentialStore;
