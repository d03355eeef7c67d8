//! The escrow orchestrator façade.
//!
//! Composes the builders, codecs, multisig handling, submission and
//! status translation into the seven public operations. Stateless:
//! the only held resource is the injected ledger gateway handle, and
//! every operation is an independent request/response call.

use crate::error::Result;
use crate::{builder, multisig, status, submission};
use chrono::Utc;
use escrow_types::{
    EscrowCancelRequest, EscrowCreateRequest, EscrowFinishRequest, EscrowStatus, EscrowTransaction,
    PreparedTransaction, SignaturePacket, SubmissionResult, TransactionRecord,
};
use escrow_xrpl::LedgerGateway;
use std::sync::Arc;
use tracing::info;

/// Escrow lifecycle orchestrator, generic over the ledger gateway so
/// tests can substitute a fake.
pub struct EscrowOrchestrator<G> {
    gateway: Arc<G>,
}

impl<G> Clone for EscrowOrchestrator<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
        }
    }
}

impl<G: LedgerGateway> EscrowOrchestrator<G> {
    /// Create an orchestrator over the given gateway.
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Prepare an unsigned EscrowCreate for off-system signing.
    pub async fn prepare_create(&self, req: &EscrowCreateRequest) -> Result<PreparedTransaction> {
        let mut tx = builder::build_create(req, Utc::now().timestamp())?;
        self.gateway.autofill(&mut tx, 0).await?;
        info!(
            "Prepared EscrowCreate for {} -> {}",
            req.source_address, req.destination_address
        );
        Ok(PreparedTransaction {
            transaction: tx,
            multisig_required: false,
            signer_quorum: None,
        })
    }

    /// Prepare an unsigned EscrowFinish, detecting whether the
    /// finisher account requires multisig. When it does, the signer
    /// quorum rides along so the caller can collect the right
    /// signatures.
    pub async fn prepare_finish(&self, req: &EscrowFinishRequest) -> Result<PreparedTransaction> {
        let mut tx = builder::build_finish(req)?;
        let quorum = multisig::detect(self.gateway.as_ref(), &req.finisher_address).await?;
        let signer_count = quorum.as_ref().map(|q| q.signer_count()).unwrap_or(0);
        self.gateway.autofill(&mut tx, signer_count).await?;
        info!(
            "Prepared EscrowFinish for {}:{} (multisig: {})",
            req.owner_address,
            req.offer_sequence,
            quorum.is_some()
        );
        Ok(PreparedTransaction {
            transaction: tx,
            multisig_required: quorum.is_some(),
            signer_quorum: quorum,
        })
    }

    /// Prepare an unsigned EscrowCancel.
    pub async fn prepare_cancel(&self, req: &EscrowCancelRequest) -> Result<PreparedTransaction> {
        let mut tx = builder::build_cancel(req)?;
        self.gateway.autofill(&mut tx, 0).await?;
        info!(
            "Prepared EscrowCancel for {}:{}",
            req.owner_address, req.offer_sequence
        );
        Ok(PreparedTransaction {
            transaction: tx,
            multisig_required: false,
            signer_quorum: None,
        })
    }

    /// Forward an already-signed transaction blob.
    pub async fn submit(&self, tx_blob: &str) -> Result<SubmissionResult> {
        submission::submit_blob(self.gateway.as_ref(), tx_blob).await
    }

    /// Assemble a multisigned transaction from collected signatures
    /// and forward it.
    pub async fn submit_multisigned(
        &self,
        tx: EscrowTransaction,
        signatures: &[SignaturePacket],
    ) -> Result<SubmissionResult> {
        let tx = multisig::assemble(tx, signatures)?;
        let response = self.gateway.submit_multisigned(&tx).await?;
        Ok(submission::normalize(response))
    }

    /// Current status of an escrow entry in the validated ledger.
    pub async fn escrow_status(&self, owner: &str, offer_sequence: u32) -> EscrowStatus {
        status::escrow_status(self.gateway.as_ref(), owner, offer_sequence).await
    }

    /// Transaction record lookup by hash.
    pub async fn transaction(&self, hash: &str) -> Result<TransactionRecord> {
        status::transaction_details(self.gateway.as_ref(), hash).await
    }
}
