//! Shared domain types for the XRPL escrow service.
//!
//! Everything here is plain data: requests coming in over the API,
//! ledger-shaped values read back from XRPL, and the result/status
//! types the orchestrator hands to callers. No I/O, no validation
//! logic beyond serde shape checks.

use serde::{Deserialize, Serialize};
use std::fmt;

mod transaction;

pub use transaction::{
    AutofillValues, EscrowCancel, EscrowCreate, EscrowFinish, EscrowTransaction, MemoEntry,
    MemoFields, SignerEntry, SignerFields, TxCommon,
};

/// Transaction hash identifier on the XRP Ledger (64 hex chars).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TxHash(pub String);

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for TxHash {
    fn from(s: String) -> Self {
        TxHash(s)
    }
}

impl From<&str> for TxHash {
    fn from(s: &str) -> Self {
        TxHash(s.to_string())
    }
}

/// Amount locked in an escrow: either native XRP expressed as an
/// integer drops string, or an issued-currency triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    /// Native XRP in drops, e.g. `"1000000"` for 1 XRP.
    Drops(String),
    /// Issued currency amount.
    Issued {
        currency: String,
        value: String,
        issuer: String,
    },
}

impl Amount {
    /// Drops value if this is a native amount.
    pub fn as_drops(&self) -> Option<&str> {
        match self {
            Amount::Drops(d) => Some(d),
            Amount::Issued { .. } => None,
        }
    }
}

/// Optional memo attached to an escrow transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoSpec {
    /// Memo type label; defaults to `"escrow"` when omitted.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub memo_type: Option<String>,
    /// Memo payload; defaults to empty when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

/// Request to create a new escrow.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EscrowCreateRequest {
    /// Funding account (classic address).
    pub source_address: String,
    /// Beneficiary account (classic address).
    pub destination_address: String,
    pub amount: Amount,
    /// Earliest release time, Unix seconds. Must be in the future.
    pub finish_after: i64,
    /// Earliest cancellation time, Unix seconds. Never before `finish_after`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancel_after: Option<i64>,
    /// Crypto-condition hash (PREIMAGE-SHA-256), hex.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<MemoSpec>,
}

/// Request to finish (release) an existing escrow.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EscrowFinishRequest {
    /// Account that created the escrow.
    pub owner_address: String,
    /// Account executing the finish; checked for a signer list.
    pub finisher_address: String,
    /// Sequence number of the original EscrowCreate.
    pub offer_sequence: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    /// Fulfillment preimage matching the condition, hex.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fulfillment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<MemoSpec>,
}

/// Request to cancel an existing escrow.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EscrowCancelRequest {
    /// Account that created the escrow.
    pub owner_address: String,
    /// Account executing the cancel.
    pub account_address: String,
    /// Sequence number of the original EscrowCreate.
    pub offer_sequence: u32,
}

/// One collected signature for a multisigned transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignaturePacket {
    pub signer_address: String,
    /// Hex-encoded transaction signature.
    pub signature: String,
    /// Hex-encoded public key the signature verifies against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signer_public_key: Option<String>,
}

/// One entry of an account's on-ledger signer list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignerListEntry {
    pub signer_address: String,
    pub signer_weight: u16,
}

/// An account's signer list plus the quorum weight required to
/// authorize a multisigned transaction. Read from the ledger, never
/// constructed locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignerListQuorum {
    pub entries: Vec<SignerListEntry>,
    pub quorum: u32,
}

impl SignerListQuorum {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn signer_count(&self) -> usize {
        self.entries.len()
    }
}

/// Unsigned transaction handed back to the caller for off-system
/// signing, together with the multisig requirement for the account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreparedTransaction {
    pub transaction: EscrowTransaction,
    pub multisig_required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signer_quorum: Option<SignerListQuorum>,
}

/// Normalized outcome of submitting a signed transaction.
///
/// `accepted` reflects only the engine result of the immediate submit
/// response. `validated` is provisional until the ledger itself
/// reports finality; nothing here waits for that.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResult {
    pub accepted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<String>,
    pub engine_result_code: String,
    pub engine_result_message: String,
    pub validated: bool,
}

/// Current state of an escrow entry as read from the validated ledger.
///
/// "Not found" is a normal outcome, not an error: the escrow may have
/// already been finished or cancelled.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum EscrowStatus {
    Active {
        owner: String,
        destination: String,
        amount: Amount,
        /// Unix seconds (converted back from ripple epoch).
        #[serde(default, skip_serializing_if = "Option::is_none")]
        finish_after: Option<i64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        cancel_after: Option<i64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        condition: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        source_tag: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        destination_tag: Option<u32>,
        previous_txn_id: String,
    },
    NotFound,
    Error {
        message: String,
    },
}

impl EscrowStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, EscrowStatus::Active { .. })
    }
}

/// Raw Escrow ledger entry as returned by the `ledger_entry` RPC.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EscrowEntryView {
    #[serde(rename = "Account")]
    pub account: String,
    #[serde(rename = "Destination")]
    pub destination: String,
    #[serde(rename = "Amount")]
    pub amount: Amount,
    /// Ripple epoch seconds.
    #[serde(rename = "FinishAfter", default, skip_serializing_if = "Option::is_none")]
    pub finish_after: Option<i64>,
    #[serde(rename = "CancelAfter", default, skip_serializing_if = "Option::is_none")]
    pub cancel_after: Option<i64>,
    #[serde(rename = "Condition", default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(rename = "SourceTag", default, skip_serializing_if = "Option::is_none")]
    pub source_tag: Option<u32>,
    #[serde(rename = "DestinationTag", default, skip_serializing_if = "Option::is_none")]
    pub destination_tag: Option<u32>,
    #[serde(rename = "PreviousTxnID", default)]
    pub previous_txn_id: String,
}

/// Ledger transaction record passed through from the `tx` RPC.
///
/// No interpretation beyond the `validated` flag; the record is the
/// ledger's own JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub hash: TxHash,
    pub validated: bool,
    pub record: serde_json::Value,
}
