//! Domain-specific error types for authentication and token operations
//!
//! Verification failures are collapsed into a single kind so the API cannot
//! be used as an oracle for which check failed.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// Credential verification failed. The message never reveals which
    /// field was wrong.
    #[error("Invalid credentials")]
    InvalidCredentials,
}

/// Token-related errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    /// The token was malformed, carried a bad signature, was expired, or is
    /// not yet valid.
    #[error("Invalid token")]
    InvalidToken,
}
