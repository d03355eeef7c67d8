//! Escrow lifecycle endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use escrow_types::{
    EscrowCancelRequest, EscrowCreateRequest, EscrowFinishRequest, EscrowStatus, EscrowTransaction,
    PreparedTransaction, SignaturePacket, SubmissionResult, TransactionRecord,
};

use crate::{error::ApiError, response::ApiResponse, state::AppState, ApiResult};

/// Request to submit an already-signed transaction blob
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequest {
    /// Hex-encoded signed transaction blob
    pub signed_tx_blob: String,
}

/// Request to assemble and submit a multisigned transaction
#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitMultisigRequest {
    /// Unsigned transaction descriptor as prepared by this service
    pub transaction: EscrowTransaction,
    /// Collected signatures, one per signer
    pub signatures: Vec<SignaturePacket>,
}

/// POST /api/v1/escrow/create - Prepare an unsigned EscrowCreate
///
/// Validates the request, builds the transaction descriptor, and
/// autofills fee, sequence, and expiry from the live ledger.
pub async fn create_escrow(
    State(state): State<AppState>,
    Json(payload): Json<EscrowCreateRequest>,
) -> ApiResult<Json<ApiResponse<PreparedTransaction>>> {
    let prepared = state.orchestrator.prepare_create(&payload).await?;
    Ok(Json(ApiResponse::ok(prepared)))
}

/// POST /api/v1/escrow/finish - Prepare an unsigned EscrowFinish
///
/// Also checks the finisher's account for a signer list; when one is
/// present the response flags the transaction as multisig and scales
/// the fee for the expected number of signatures.
pub async fn finish_escrow(
    State(state): State<AppState>,
    Json(payload): Json<EscrowFinishRequest>,
) -> ApiResult<Json<ApiResponse<PreparedTransaction>>> {
    let prepared = state.orchestrator.prepare_finish(&payload).await?;
    Ok(Json(ApiResponse::ok(prepared)))
}

/// POST /api/v1/escrow/cancel - Prepare an unsigned EscrowCancel
pub async fn cancel_escrow(
    State(state): State<AppState>,
    Json(payload): Json<EscrowCancelRequest>,
) -> ApiResult<Json<ApiResponse<PreparedTransaction>>> {
    let prepared = state.orchestrator.prepare_cancel(&payload).await?;
    Ok(Json(ApiResponse::ok(prepared)))
}

/// POST /api/v1/escrow/submit - Submit a signed transaction blob
///
/// The engine result is reported inside the payload; a rejection code
/// is a successful HTTP response with `accepted: false`.
pub async fn submit_escrow(
    State(state): State<AppState>,
    Json(payload): Json<SubmitRequest>,
) -> ApiResult<Json<ApiResponse<SubmissionResult>>> {
    let result = state.orchestrator.submit(&payload.signed_tx_blob).await?;
    Ok(Json(ApiResponse::ok(result)))
}

/// POST /api/v1/escrow/submit-multisig - Assemble and submit a
/// multisigned transaction
pub async fn submit_multisig_escrow(
    State(state): State<AppState>,
    Json(payload): Json<SubmitMultisigRequest>,
) -> ApiResult<Json<ApiResponse<SubmissionResult>>> {
    let result = state
        .orchestrator
        .submit_multisigned(payload.transaction, &payload.signatures)
        .await?;
    Ok(Json(ApiResponse::ok(result)))
}

/// GET /api/v1/escrow/status/:owner/:sequence - Escrow entry status
///
/// A missing entry is reported as `state: "not_found"`, not as an
/// HTTP error; the escrow may simply have been finished or cancelled.
pub async fn escrow_status(
    State(state): State<AppState>,
    Path((owner, sequence)): Path<(String, u32)>,
) -> ApiResult<Json<ApiResponse<EscrowStatus>>> {
    let status = state.orchestrator.escrow_status(&owner, sequence).await;
    Ok(Json(ApiResponse::ok(status)))
}

/// GET /api/v1/escrow/transaction/:hash - Transaction record lookup
pub async fn get_transaction(
    State(state): State<AppState>,
    Path(hash): Path<String>,
) -> ApiResult<Json<ApiResponse<TransactionRecord>>> {
    if hash.is_empty() || hex::decode(&hash).is_err() {
        return Err(ApiError::BadRequest(
            "Transaction hash must be a hex string".to_string(),
        ));
    }
    let record = state.orchestrator.transaction(&hash).await?;
    Ok(Json(ApiResponse::ok(record)))
}
