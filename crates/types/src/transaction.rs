//! Ledger-native transaction descriptors.
//!
//! A closed set of escrow transaction kinds instead of an open field
//! map: each kind carries an explicit schema, optional fields are
//! omitted from the JSON entirely when unset, and the serialized form
//! uses the ledger's own PascalCase field names so the output can be
//! signed and submitted as-is.

use crate::Amount;
use serde::{Deserialize, Serialize};

/// Fields common to every escrow transaction kind.
///
/// `fee`, `sequence` and `last_ledger_sequence` start out unset and
/// are populated by gateway autofill; they are never overwritten once
/// present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxCommon {
    #[serde(rename = "Account")]
    pub account: String,
    /// Network fee in drops.
    #[serde(rename = "Fee", default, skip_serializing_if = "Option::is_none")]
    pub fee: Option<String>,
    #[serde(rename = "Sequence", default, skip_serializing_if = "Option::is_none")]
    pub sequence: Option<u32>,
    /// Ledger index after which the transaction can no longer apply.
    #[serde(
        rename = "LastLedgerSequence",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub last_ledger_sequence: Option<u32>,
    /// Empty string for multisigned transactions; absent otherwise.
    /// A transaction is signed with either a signing key or a signer
    /// list, never both.
    #[serde(
        rename = "SigningPubKey",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub signing_pub_key: Option<String>,
    #[serde(rename = "Memos", default, skip_serializing_if = "Option::is_none")]
    pub memos: Option<Vec<MemoEntry>>,
    #[serde(rename = "Signers", default, skip_serializing_if = "Option::is_none")]
    pub signers: Option<Vec<SignerEntry>>,
}

impl TxCommon {
    pub fn new(account: String) -> Self {
        Self {
            account,
            fee: None,
            sequence: None,
            last_ledger_sequence: None,
            signing_pub_key: None,
            memos: None,
            signers: None,
        }
    }
}

/// Memo wrapper matching the ledger's `{"Memo": {...}}` nesting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoEntry {
    #[serde(rename = "Memo")]
    pub memo: MemoFields,
}

/// Hex-encoded memo content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoFields {
    #[serde(rename = "MemoType")]
    pub memo_type: String,
    #[serde(rename = "MemoData")]
    pub memo_data: String,
}

/// Signer wrapper matching the ledger's `{"Signer": {...}}` nesting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignerEntry {
    #[serde(rename = "Signer")]
    pub signer: SignerFields,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignerFields {
    #[serde(rename = "Account")]
    pub account: String,
    #[serde(rename = "TxnSignature")]
    pub txn_signature: String,
    #[serde(
        rename = "SigningPubKey",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub signing_pub_key: Option<String>,
}

/// EscrowCreate-specific fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscrowCreate {
    #[serde(flatten)]
    pub common: TxCommon,
    #[serde(rename = "Destination")]
    pub destination: String,
    #[serde(rename = "Amount")]
    pub amount: Amount,
    /// Ripple epoch seconds.
    #[serde(rename = "FinishAfter", default, skip_serializing_if = "Option::is_none")]
    pub finish_after: Option<u32>,
    #[serde(rename = "CancelAfter", default, skip_serializing_if = "Option::is_none")]
    pub cancel_after: Option<u32>,
    #[serde(rename = "Condition", default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
}

/// EscrowFinish-specific fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscrowFinish {
    #[serde(flatten)]
    pub common: TxCommon,
    #[serde(rename = "Owner")]
    pub owner: String,
    #[serde(rename = "OfferSequence")]
    pub offer_sequence: u32,
    #[serde(rename = "Condition", default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(rename = "Fulfillment", default, skip_serializing_if = "Option::is_none")]
    pub fulfillment: Option<String>,
}

/// EscrowCancel-specific fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscrowCancel {
    #[serde(flatten)]
    pub common: TxCommon,
    #[serde(rename = "Owner")]
    pub owner: String,
    #[serde(rename = "OfferSequence")]
    pub offer_sequence: u32,
}

/// An escrow transaction descriptor, tagged with the ledger's
/// `TransactionType` discriminator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "TransactionType")]
pub enum EscrowTransaction {
    EscrowCreate(EscrowCreate),
    EscrowFinish(EscrowFinish),
    EscrowCancel(EscrowCancel),
}

/// Values populated into a descriptor by gateway autofill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutofillValues {
    pub fee_drops: String,
    pub sequence: u32,
    pub last_ledger_sequence: u32,
}

impl EscrowTransaction {
    /// The account that must sign (or multisign) this transaction.
    pub fn account(&self) -> &str {
        &self.common().account
    }

    pub fn common(&self) -> &TxCommon {
        match self {
            EscrowTransaction::EscrowCreate(t) => &t.common,
            EscrowTransaction::EscrowFinish(t) => &t.common,
            EscrowTransaction::EscrowCancel(t) => &t.common,
        }
    }

    pub fn common_mut(&mut self) -> &mut TxCommon {
        match self {
            EscrowTransaction::EscrowCreate(t) => &mut t.common,
            EscrowTransaction::EscrowFinish(t) => &mut t.common,
            EscrowTransaction::EscrowCancel(t) => &mut t.common,
        }
    }

    /// Fill fee, sequence and expiry bound, leaving any field the
    /// caller already set untouched.
    pub fn apply_autofill(&mut self, values: &AutofillValues) {
        let common = self.common_mut();
        if common.fee.is_none() {
            common.fee = Some(values.fee_drops.clone());
        }
        if common.sequence.is_none() {
            common.sequence = Some(values.sequence);
        }
        if common.last_ledger_sequence.is_none() {
            common.last_ledger_sequence = Some(values.last_ledger_sequence);
        }
    }

    /// Whether autofill has populated all delegated fields.
    pub fn is_autofilled(&self) -> bool {
        let common = self.common();
        common.fee.is_some() && common.sequence.is_some() && common.last_ledger_sequence.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_create() -> EscrowTransaction {
        EscrowTransaction::EscrowCreate(EscrowCreate {
            common: TxCommon::new("rSourceAccount".to_string()),
            destination: "rDestAccount".to_string(),
            amount: Amount::Drops("1000000".to_string()),
            finish_after: Some(756839000),
            cancel_after: None,
            condition: None,
        })
    }

    #[test]
    fn test_transaction_type_tag() {
        let tx = sample_create();
        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(json["TransactionType"], "EscrowCreate");
        assert_eq!(json["Account"], "rSourceAccount");
        assert_eq!(json["FinishAfter"], 756839000);
    }

    #[test]
    fn test_unset_optional_fields_are_omitted() {
        let tx = sample_create();
        let json = serde_json::to_value(&tx).unwrap();
        let obj = json.as_object().unwrap();
        assert!(!obj.contains_key("CancelAfter"));
        assert!(!obj.contains_key("Condition"));
        assert!(!obj.contains_key("Memos"));
        assert!(!obj.contains_key("Fee"));
        assert!(!obj.contains_key("SigningPubKey"));
    }

    #[test]
    fn test_apply_autofill_preserves_existing() {
        let mut tx = sample_create();
        tx.common_mut().fee = Some("10".to_string());
        tx.apply_autofill(&AutofillValues {
            fee_drops: "12".to_string(),
            sequence: 42,
            last_ledger_sequence: 7_654_321,
        });
        assert_eq!(tx.common().fee.as_deref(), Some("10"));
        assert_eq!(tx.common().sequence, Some(42));
        assert_eq!(tx.common().last_ledger_sequence, Some(7_654_321));
        assert!(tx.is_autofilled());
    }

    #[test]
    fn test_roundtrip_through_ledger_json() {
        let mut tx = sample_create();
        tx.apply_autofill(&AutofillValues {
            fee_drops: "12".to_string(),
            sequence: 3,
            last_ledger_sequence: 100,
        });
        let json = serde_json::to_string(&tx).unwrap();
        let back: EscrowTransaction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tx);
    }

    #[test]
    fn test_finish_descriptor_fields() {
        let tx = EscrowTransaction::EscrowFinish(EscrowFinish {
            common: TxCommon::new("rFinisher".to_string()),
            owner: "rOwner".to_string(),
            offer_sequence: 17,
            condition: Some("A0258020...".to_string()),
            fulfillment: Some("A0228020...".to_string()),
        });
        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(json["TransactionType"], "EscrowFinish");
        assert_eq!(json["Owner"], "rOwner");
        assert_eq!(json["OfferSequence"], 17);
    }
}
