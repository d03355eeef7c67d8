//! Submission gateway: engine-result normalization.
//!
//! An engine code other than `tesSUCCESS` is a domain-level
//! rejection carried inside `SubmissionResult`, not an error. Only
//! transport failures propagate as errors.

use crate::error::{EscrowError, Result};
use escrow_types::SubmissionResult;
use escrow_xrpl::{LedgerGateway, SubmitResponse};
use tracing::{info, warn};

/// Engine result code for preliminary acceptance.
pub const ENGINE_SUCCESS: &str = "tesSUCCESS";

/// Normalize a submit response into the domain result.
pub fn normalize(response: SubmitResponse) -> SubmissionResult {
    let accepted = response.engine_result == ENGINE_SUCCESS;
    let result = SubmissionResult {
        accepted,
        transaction_hash: response.tx_hash(),
        engine_result_code: response.engine_result,
        engine_result_message: response.engine_result_message,
        validated: response.validated,
    };
    if accepted {
        info!(
            "Transaction accepted by engine: {:?}",
            result.transaction_hash
        );
    } else {
        warn!(
            "Transaction rejected by engine: {} ({})",
            result.engine_result_code, result.engine_result_message
        );
    }
    result
}

/// Forward an already-signed transaction blob to the ledger.
pub async fn submit_blob<G: LedgerGateway>(gateway: &G, tx_blob: &str) -> Result<SubmissionResult> {
    if tx_blob.is_empty() || hex::decode(tx_blob).is_err() {
        return Err(EscrowError::validation(
            "signedTxBlob",
            "must be a non-empty hex string",
        ));
    }
    let response = gateway.submit_blob(tx_blob).await?;
    Ok(normalize(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(engine_result: &str) -> SubmitResponse {
        SubmitResponse {
            engine_result: engine_result.to_string(),
            engine_result_message: "message".to_string(),
            tx_json: Some(json!({"hash": "DEADBEEF"})),
            validated: false,
        }
    }

    #[test]
    fn test_tes_success_is_accepted() {
        let result = normalize(response("tesSUCCESS"));
        assert!(result.accepted);
        assert_eq!(result.transaction_hash.as_deref(), Some("DEADBEEF"));
        assert!(!result.validated);
    }

    #[test]
    fn test_non_tes_code_is_domain_rejection_not_error() {
        for code in ["tecNO_PERMISSION", "tefPAST_SEQ", "terRETRY"] {
            let result = normalize(response(code));
            assert!(!result.accepted);
            assert_eq!(result.engine_result_code, code);
        }
    }
}
