//! API error type and its HTTP mapping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use escrow_orchestrator::{EscrowError, FieldError};
use thiserror::Error;

use crate::response::ApiResponse;

/// Errors surfaced by API handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request was malformed or could not be processed
    #[error("{0}")]
    BadRequest(String),

    /// Request failed structured input validation
    #[error("validation failed")]
    Validation(Vec<FieldError>),

    /// Requested resource does not exist
    #[error("{0}")]
    NotFound(String),
}

impl From<EscrowError> for ApiError {
    fn from(err: EscrowError) -> Self {
        match err {
            EscrowError::Validation(fields) => ApiError::Validation(fields),
            other => ApiError::BadRequest(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, envelope) = match self {
            ApiError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                ApiResponse::<()>::failure(message),
            ),
            ApiError::Validation(fields) => (
                StatusCode::BAD_REQUEST,
                ApiResponse::<()>::validation_failure("validation failed", fields),
            ),
            ApiError::NotFound(message) => {
                (StatusCode::NOT_FOUND, ApiResponse::<()>::failure(message))
            }
        };
        (status, Json(envelope)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_maps_to_400_with_details() {
        let err: ApiError = EscrowError::validation("finishAfter", "must not be in the past")
            .into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_gateway_error_maps_to_bad_request() {
        let err: ApiError = EscrowError::GatewayUnavailable("connection refused".to_string()).into();
        assert!(matches!(err, ApiError::BadRequest(_)));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let err = ApiError::NotFound("no such route".to_string());
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }
}
