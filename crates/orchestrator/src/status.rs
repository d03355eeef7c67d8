//! Status translation: ledger state to the domain status model.
//!
//! "Entry not found" is a normal outcome (the escrow may already be
//! finished or cancelled) and maps to `EscrowStatus::NotFound`; only
//! transport and query failures become `EscrowStatus::Error`.

use crate::address;
use crate::error::Result;
use crate::time;
use escrow_types::{EscrowEntryView, EscrowStatus, TransactionRecord};
use escrow_xrpl::LedgerGateway;
use tracing::debug;

/// Current status of the (owner, offer_sequence) escrow entry in the
/// validated ledger.
pub async fn escrow_status<G: LedgerGateway>(
    gateway: &G,
    owner: &str,
    offer_sequence: u32,
) -> EscrowStatus {
    if address::validate(owner).is_err() {
        return EscrowStatus::Error {
            message: format!("invalid owner address: {}", owner),
        };
    }

    match gateway.escrow_entry(owner, offer_sequence).await {
        Ok(Some(entry)) => {
            debug!("Escrow {}:{} is active", owner, offer_sequence);
            active_status(entry)
        }
        Ok(None) => {
            debug!("Escrow {}:{} not found", owner, offer_sequence);
            EscrowStatus::NotFound
        }
        Err(e) => EscrowStatus::Error {
            message: e.to_string(),
        },
    }
}

/// Transaction record lookup by hash, passed through with its
/// `validated` flag.
pub async fn transaction_details<G: LedgerGateway>(
    gateway: &G,
    hash: &str,
) -> Result<TransactionRecord> {
    let record = gateway.transaction(hash).await?;
    Ok(record)
}

fn active_status(entry: EscrowEntryView) -> EscrowStatus {
    EscrowStatus::Active {
        owner: entry.account,
        destination: entry.destination,
        amount: entry.amount,
        finish_after: entry.finish_after.map(time::from_ripple_epoch),
        cancel_after: entry.cancel_after.map(time::from_ripple_epoch),
        condition: entry.condition,
        source_tag: entry.source_tag,
        destination_tag: entry.destination_tag,
        previous_txn_id: entry.previous_txn_id,
    }
}
