//! Wire-level types for the XRPL JSON-RPC methods this service uses.

use escrow_types::{SignerListEntry, SignerListQuorum};
use serde::{Deserialize, Serialize};

/// Result payload of the `submit` / `submit_multisigned` RPCs.
///
/// `engine_result` is the preliminary acceptance code; it says nothing
/// about final settlement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub engine_result: String,
    #[serde(default)]
    pub engine_result_message: String,
    #[serde(default)]
    pub tx_json: Option<serde_json::Value>,
    #[serde(default)]
    pub validated: bool,
}

impl SubmitResponse {
    /// Hash of the submitted transaction, if the engine echoed it back.
    pub fn tx_hash(&self) -> Option<String> {
        self.tx_json
            .as_ref()
            .and_then(|tx| tx.get("hash"))
            .and_then(|h| h.as_str())
            .map(|h| h.to_string())
    }
}

/// `account_data` object of the `account_info` RPC (requested with
/// `signer_lists: true`).
#[derive(Debug, Clone, Deserialize)]
pub struct AccountData {
    #[serde(rename = "Sequence")]
    pub sequence: u32,
    #[serde(default)]
    pub signer_lists: Vec<SignerListObject>,
}

/// On-ledger SignerList object.
#[derive(Debug, Clone, Deserialize)]
pub struct SignerListObject {
    #[serde(rename = "SignerQuorum")]
    pub signer_quorum: u32,
    #[serde(rename = "SignerEntries", default)]
    pub signer_entries: Vec<SignerEntryWrapper>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SignerEntryWrapper {
    #[serde(rename = "SignerEntry")]
    pub signer_entry: SignerEntryData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SignerEntryData {
    #[serde(rename = "Account")]
    pub account: String,
    #[serde(rename = "SignerWeight")]
    pub signer_weight: u16,
}

impl SignerListObject {
    /// Flatten the ledger's nested wrapper objects into the domain
    /// quorum shape, preserving entry order.
    pub fn into_quorum(self) -> SignerListQuorum {
        SignerListQuorum {
            entries: self
                .signer_entries
                .into_iter()
                .map(|w| SignerListEntry {
                    signer_address: w.signer_entry.account,
                    signer_weight: w.signer_entry.signer_weight,
                })
                .collect(),
            quorum: self.signer_quorum,
        }
    }
}

/// `drops` object of the `fee` RPC.
#[derive(Debug, Clone, Deserialize)]
pub struct FeeDrops {
    pub open_ledger_fee: String,
    #[serde(default)]
    pub minimum_fee: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_response_hash_extraction() {
        let resp: SubmitResponse = serde_json::from_str(
            r#"{
                "engine_result": "tesSUCCESS",
                "engine_result_message": "The transaction was applied.",
                "tx_json": {"hash": "E08D6E9754025BA2534A78707605E0601F03ACE063687A0CA1BDDACFCD1698C7"}
            }"#,
        )
        .unwrap();
        assert_eq!(
            resp.tx_hash().as_deref(),
            Some("E08D6E9754025BA2534A78707605E0601F03ACE063687A0CA1BDDACFCD1698C7")
        );
        assert!(!resp.validated);
    }

    #[test]
    fn test_signer_list_flattening() {
        let list: SignerListObject = serde_json::from_str(
            r#"{
                "SignerQuorum": 3,
                "SignerEntries": [
                    {"SignerEntry": {"Account": "rAlice", "SignerWeight": 2}},
                    {"SignerEntry": {"Account": "rBob", "SignerWeight": 1}}
                ]
            }"#,
        )
        .unwrap();
        let quorum = list.into_quorum();
        assert_eq!(quorum.quorum, 3);
        assert_eq!(quorum.entries.len(), 2);
        assert_eq!(quorum.entries[0].signer_address, "rAlice");
        assert_eq!(quorum.entries[0].signer_weight, 2);
    }

    #[test]
    fn test_account_data_without_signer_lists() {
        let data: AccountData = serde_json::from_str(r#"{"Sequence": 42}"#).unwrap();
        assert_eq!(data.sequence, 42);
        assert!(data.signer_lists.is_empty());
    }
}
