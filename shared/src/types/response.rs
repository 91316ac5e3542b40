//! API response types

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Standard error body returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Stable machine-readable error code
    pub error: String,

    /// Human-readable message
    pub message: String,

    /// Optional structured details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, serde_json::Value>>,

    /// Response timestamp
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create an error response with the given code and message
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: None,
            timestamp: Utc::now(),
        }
    }

    /// Attach structured details
    pub fn with_details(mut self, details: HashMap<String, serde_json::Value>) -> Self {
        self.details = Some(details);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_without_empty_details() {
        let body = ErrorResponse::new("invalid_token", "Invalid token");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["error"], "invalid_token");
        assert_eq!(json["message"], "Invalid token");
        assert!(json.get("details").is_none());
    }

    #[test]
    fn keeps_attached_details() {
        let mut details = HashMap::new();
        details.insert("field".to_string(), serde_json::json!("email"));
        let body = ErrorResponse::new("validation_error", "Invalid request data")
            .with_details(details);
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["details"]["field"], "email");
    }
}
