//! Shared error response structure and stable error codes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Error payload surfaced to the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub error: String,

    /// Human-readable error message (localized)
    pub message: String,

    /// Additional error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, serde_json::Value>>,

    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: None,
            timestamp: Utc::now(),
        }
    }

    /// Add a detail field to the error response
    pub fn add_detail(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        let details = self.details.get_or_insert_with(HashMap::new);
        if let Ok(json_value) = serde_json::to_value(value) {
            details.insert(key.into(), json_value);
        }
        self
    }
}

/// Stable error codes used across the workspace
pub mod error_codes {
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const IDENTIFIER_INVALID: &str = "IDENTIFIER_INVALID";
    pub const CODE_INCOMPLETE: &str = "CODE_INCOMPLETE";
    pub const SLOT_OUT_OF_RANGE: &str = "SLOT_OUT_OF_RANGE";
    pub const INPUT_LOCKED: &str = "INPUT_LOCKED";
    pub const SUBMISSION_PENDING: &str = "SUBMISSION_PENDING";
    pub const RESEND_PENDING: &str = "RESEND_PENDING";
    pub const ALREADY_VERIFIED: &str = "ALREADY_VERIFIED";
    pub const NOT_SUBMITTING: &str = "NOT_SUBMITTING";
    pub const CODE_REJECTED: &str = "CODE_REJECTED";
    pub const VERIFICATION_FAILED: &str = "VERIFICATION_FAILED";
    pub const RESEND_FAILED: &str = "RESEND_FAILED";
}

/// Trait for converting errors to ErrorResponse
pub trait IntoErrorResponse {
    fn to_error_response(&self) -> ErrorResponse;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_detail() {
        let response = ErrorResponse::new(error_codes::CODE_INCOMPLETE, "Enter all 6 digits")
            .add_detail("filled", 5)
            .add_detail("required", 6);

        let details = response.details.unwrap();
        assert_eq!(details["filled"], serde_json::json!(5));
        assert_eq!(details["required"], serde_json::json!(6));
    }

    #[test]
    fn test_details_skipped_when_absent() {
        let response = ErrorResponse::new(error_codes::INTERNAL_ERROR, "boom");
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("details").is_none());
        assert_eq!(json["error"], "INTERNAL_ERROR");
    }
}
