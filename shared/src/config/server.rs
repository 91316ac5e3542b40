//! Server configuration module

use std::env;

use crate::errors::ConfigError;

/// Environment variable overriding the bind host
pub const SERVER_HOST_VAR: &str = "SERVER_HOST";

/// Environment variable overriding the bind port
pub const SERVER_PORT_VAR: &str = "SERVER_PORT";

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("127.0.0.1"),
            port: 8080,
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Load the server configuration from the environment
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let host = env::var(SERVER_HOST_VAR).unwrap_or(defaults.host);
        let port = match env::var(SERVER_PORT_VAR) {
            Ok(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidVar {
                name: SERVER_PORT_VAR.to_string(),
                message: "expected a valid TCP port".to_string(),
            })?,
            Err(_) => defaults.port,
        };
        Ok(Self { host, port })
    }

    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_address_joins_host_and_port() {
        let config = ServerConfig::new("0.0.0.0", 3000);
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
    }

    #[test]
    fn defaults_to_loopback() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
    }
}
