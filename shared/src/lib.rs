//! Shared utilities and common types for the TokenGate server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error types and response structures
//! - Validation helpers
//! - Common type definitions

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, AuthConfig, Environment, JwtConfig, LoggingConfig, ServerConfig};
pub use errors::{ConfigError, ConfigResult};
pub use types::ErrorResponse;
pub use utils::validation;
