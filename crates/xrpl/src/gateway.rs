//! Gateway trait the orchestrator is programmed against.
//!
//! The trait exists so the orchestration logic never touches a
//! concrete transport: production wires in `JsonRpcClient`, tests
//! wire in a fake.

use crate::client::{JsonRpcClient, LedgerError};
use crate::types::SubmitResponse;
use async_trait::async_trait;
use escrow_types::{EscrowEntryView, EscrowTransaction, SignerListQuorum, TransactionRecord};

/// Outbound ledger interface consumed by the orchestrator.
///
/// Contract: `autofill` never changes semantic fields it wasn't
/// given, submission is synchronous per call, and an absent ledger
/// entry is a distinguishable `None`, not an error.
#[async_trait]
pub trait LedgerGateway: Send + Sync {
    /// Populate fee, sequence and expiry bound on an unsigned
    /// descriptor. `signer_count` is non-zero when the transaction
    /// will be multisigned, which scales the network fee.
    async fn autofill(
        &self,
        tx: &mut EscrowTransaction,
        signer_count: usize,
    ) -> Result<(), LedgerError>;

    /// The account's signer list, `None` when the account signs for
    /// itself.
    async fn signer_list(&self, account: &str) -> Result<Option<SignerListQuorum>, LedgerError>;

    /// Forward an already-signed transaction blob.
    async fn submit_blob(&self, tx_blob: &str) -> Result<SubmitResponse, LedgerError>;

    /// Forward an assembled multisigned transaction.
    async fn submit_multisigned(
        &self,
        tx: &EscrowTransaction,
    ) -> Result<SubmitResponse, LedgerError>;

    /// Escrow entry lookup against the validated ledger.
    async fn escrow_entry(
        &self,
        owner: &str,
        offer_sequence: u32,
    ) -> Result<Option<EscrowEntryView>, LedgerError>;

    /// Transaction record lookup by hash.
    async fn transaction(&self, hash: &str) -> Result<TransactionRecord, LedgerError>;
}

#[async_trait]
impl LedgerGateway for JsonRpcClient {
    async fn autofill(
        &self,
        tx: &mut EscrowTransaction,
        signer_count: usize,
    ) -> Result<(), LedgerError> {
        let account = tx.account().to_string();
        let values = self.autofill_values(&account, signer_count).await?;
        tx.apply_autofill(&values);
        Ok(())
    }

    async fn signer_list(&self, account: &str) -> Result<Option<SignerListQuorum>, LedgerError> {
        JsonRpcClient::signer_list(self, account).await
    }

    async fn submit_blob(&self, tx_blob: &str) -> Result<SubmitResponse, LedgerError> {
        self.submit(tx_blob).await
    }

    async fn submit_multisigned(
        &self,
        tx: &EscrowTransaction,
    ) -> Result<SubmitResponse, LedgerError> {
        JsonRpcClient::submit_multisigned(self, tx).await
    }

    async fn escrow_entry(
        &self,
        owner: &str,
        offer_sequence: u32,
    ) -> Result<Option<EscrowEntryView>, LedgerError> {
        JsonRpcClient::escrow_entry(self, owner, offer_sequence).await
    }

    async fn transaction(&self, hash: &str) -> Result<TransactionRecord, LedgerError> {
        JsonRpcClient::transaction(self, hash).await
    }
}
