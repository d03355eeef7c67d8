//! Error types for escrow orchestration

use escrow_xrpl::LedgerError;
use serde::Serialize;
use thiserror::Error;

/// Result type for orchestration operations
pub type Result<T> = std::result::Result<T, EscrowError>;

/// One field-level validation failure, surfaced to the caller in the
/// HTTP error envelope.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Errors that can occur during escrow orchestration.
///
/// Domain rejections (non-`tes` engine codes) and absent escrow
/// entries are NOT errors; they travel in `SubmissionResult` and
/// `EscrowStatus` respectively.
#[derive(Error, Debug)]
pub enum EscrowError {
    /// Malformed or out-of-invariant request, user-correctable.
    #[error("Validation failed: {}", format_fields(.0))]
    Validation(Vec<FieldError>),

    /// Structurally invalid ledger account identifier.
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// The ledger network cannot be reached.
    #[error("Ledger gateway unavailable: {0}")]
    GatewayUnavailable(String),

    /// Multisig assembly with no signatures.
    #[error("Multisig assembly requires at least one signature")]
    EmptySignatureSet,

    /// The ledger answered but refused the request itself (bad
    /// params, unknown account, malformed blob).
    #[error("Ledger error: {0}")]
    Ledger(String),
}

impl EscrowError {
    /// Single-field validation failure.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        EscrowError::Validation(vec![FieldError::new(field, message)])
    }
}

impl From<LedgerError> for EscrowError {
    fn from(err: LedgerError) -> Self {
        if err.is_transport() {
            EscrowError::GatewayUnavailable(err.to_string())
        } else {
            EscrowError::Ledger(err.to_string())
        }
    }
}

fn format_fields(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(|f| format!("{}: {}", f.field, f.message))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display_lists_fields() {
        let err = EscrowError::Validation(vec![
            FieldError::new("finishAfter", "must be in the future"),
            FieldError::new("cancelAfter", "must not precede finishAfter"),
        ]);
        let msg = err.to_string();
        assert!(msg.contains("finishAfter"));
        assert!(msg.contains("cancelAfter"));
    }

    #[test]
    fn test_transport_errors_map_to_gateway_unavailable() {
        let err: EscrowError = LedgerError::ApiRequest("connection refused".to_string()).into();
        assert!(matches!(err, EscrowError::GatewayUnavailable(_)));

        let err: EscrowError = LedgerError::Rpc {
            code: "invalidParams".to_string(),
            message: "bad".to_string(),
        }
        .into();
        assert!(matches!(err, EscrowError::Ledger(_)));
    }
}
