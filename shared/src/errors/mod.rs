//! Shared error types

use thiserror::Error;

/// Configuration errors raised while loading process-wide settings.
///
/// All of these are fatal: the server refuses to start when any of them
/// surfaces during configuration loading.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {name}")]
    MissingVar { name: String },

    #[error("environment variable {name} must not be empty")]
    EmptyVar { name: String },

    #[error("invalid value for {name}: {message}")]
    InvalidVar { name: String, message: String },

    #[error("JWT signing secret must not be empty")]
    EmptySecret,
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_variable() {
        let err = ConfigError::MissingVar {
            name: "JWT_SECRET".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "missing required environment variable JWT_SECRET"
        );

        let err = ConfigError::InvalidVar {
            name: "SERVER_PORT".to_string(),
            message: "expected a valid TCP port".to_string(),
        };
        assert!(err.to_string().contains("SERVER_PORT"));
    }
}
