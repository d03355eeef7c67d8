//! Uniform response envelope for all API endpoints

use chrono::{DateTime, Utc};
use escrow_orchestrator::FieldError;
use serde::Serialize;

/// Envelope wrapping every API response body
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request was handled successfully
    pub success: bool,
    /// Payload, present on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human-readable error message, present on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Per-field validation failures, present on validation errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
    /// Server time the response was produced
    pub timestamp: DateTime<Utc>,
}

impl<T> ApiResponse<T> {
    /// Successful envelope around a payload
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            details: None,
            timestamp: Utc::now(),
        }
    }

    /// Failure envelope with an error message
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            details: None,
            timestamp: Utc::now(),
        }
    }

    /// Failure envelope carrying per-field validation details
    pub fn validation_failure(error: impl Into<String>, details: Vec<FieldError>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            details: Some(details),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_envelope_omits_error_fields() {
        let value = serde_json::to_value(ApiResponse::ok(42)).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["data"], 42);
        assert!(value.get("error").is_none());
        assert!(value.get("details").is_none());
        assert!(value.get("timestamp").is_some());
    }

    #[test]
    fn test_validation_envelope_carries_details() {
        let details = vec![FieldError::new("amount", "must be a positive integer")];
        let envelope: ApiResponse<()> =
            ApiResponse::validation_failure("validation failed", details);
        let value = serde_json::to_value(envelope).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["details"][0]["field"], "amount");
        assert!(value.get("data").is_none());
    }
}
