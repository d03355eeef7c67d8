//! XRPL JSON-RPC client.
//!
//! Provides async access to:
//! - Account info and signer lists
//! - Escrow ledger entries (validated ledger)
//! - Transaction lookup
//! - Signed-blob and multisigned submission
//! - Fee and open-ledger queries for autofill

use crate::types::{AccountData, FeeDrops, SubmitResponse};
use escrow_types::{EscrowEntryView, EscrowTransaction, SignerListQuorum, TransactionRecord, TxHash};
use serde_json::{json, Value};
use thiserror::Error;
use tracing::debug;

/// Ledger index margin added to the current ledger when computing
/// `LastLedgerSequence` during autofill.
const LAST_LEDGER_OFFSET: u32 = 20;

/// XRPL network configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerNetwork {
    Mainnet,
    Testnet,
    Devnet,
    /// Explicit JSON-RPC endpoint URL.
    Custom(String),
}

impl LedgerNetwork {
    /// Parse from string (environment variable). Anything that looks
    /// like a URL becomes a custom endpoint; unknown names default to
    /// testnet.
    pub fn parse(s: &str) -> Self {
        if s.starts_with("http://") || s.starts_with("https://") {
            return LedgerNetwork::Custom(s.to_string());
        }
        match s.to_lowercase().as_str() {
            "mainnet" | "main" | "livenet" => LedgerNetwork::Mainnet,
            "devnet" | "dev" => LedgerNetwork::Devnet,
            _ => LedgerNetwork::Testnet, // Default to testnet
        }
    }

    /// JSON-RPC endpoint for this network.
    pub fn json_rpc_url(&self) -> String {
        match self {
            LedgerNetwork::Mainnet => "https://s1.ripple.com:51234/".to_string(),
            LedgerNetwork::Testnet => "https://s.altnet.rippletest.net:51234/".to_string(),
            LedgerNetwork::Devnet => "https://s.devnet.rippletest.net:51234/".to_string(),
            LedgerNetwork::Custom(url) => url.clone(),
        }
    }

    /// Block explorer base URL, where one exists.
    pub fn explorer_url(&self) -> Option<&'static str> {
        match self {
            LedgerNetwork::Mainnet => Some("https://livenet.xrpl.org"),
            LedgerNetwork::Testnet => Some("https://testnet.xrpl.org"),
            LedgerNetwork::Devnet => Some("https://devnet.xrpl.org"),
            LedgerNetwork::Custom(_) => None,
        }
    }
}

/// Errors that can occur when talking to the XRP Ledger.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Transport-level failure: endpoint unreachable, timeout,
    /// connection reset. Never retried here.
    #[error("RPC request failed: {0}")]
    ApiRequest(String),

    #[error("RPC HTTP error {status}: {body}")]
    ApiError { status: u16, body: String },

    #[error("Failed to parse response: {0}")]
    ParseResponse(String),

    /// rippled answered with an error result (e.g. `actNotFound`).
    /// Structural "not found" codes are handled by the typed lookups
    /// before this surfaces.
    #[error("Ledger error {code}: {message}")]
    Rpc { code: String, message: String },

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl LedgerError {
    /// Whether this error means the gateway could not be reached at
    /// all, as opposed to the ledger rejecting the request.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            LedgerError::ApiRequest(_) | LedgerError::ApiError { .. }
        )
    }
}

/// Async JSON-RPC client for an XRPL HTTP endpoint.
pub struct JsonRpcClient {
    network: LedgerNetwork,
    endpoint: String,
    client: reqwest::Client,
}

impl JsonRpcClient {
    /// Create a new client for the given network.
    pub fn new(network: LedgerNetwork) -> Self {
        let endpoint = network.json_rpc_url();
        Self {
            network,
            endpoint,
            client: reqwest::Client::new(),
        }
    }

    /// Get the network this client is configured for.
    pub fn network(&self) -> &LedgerNetwork {
        &self.network
    }

    /// Transaction URL for the block explorer.
    pub fn tx_url(&self, hash: &str) -> String {
        if let Some(explorer) = self.network.explorer_url() {
            format!("{}/transactions/{}", explorer, hash)
        } else {
            format!("tx:{}", hash)
        }
    }

    /// Issue a raw JSON-RPC request and return the `result` object.
    ///
    /// rippled-level errors (`"status": "error"`) come back as
    /// `LedgerError::Rpc`; callers that treat specific codes as normal
    /// outcomes match on the code before propagating.
    pub async fn request(&self, method: &str, params: Value) -> Result<Value, LedgerError> {
        let body = json!({
            "method": method,
            "params": [params],
        });

        debug!("XRPL RPC {} -> {}", method, self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| LedgerError::ApiRequest(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(LedgerError::ApiError { status, body });
        }

        let envelope: Value = response
            .json()
            .await
            .map_err(|e| LedgerError::ParseResponse(e.to_string()))?;

        let result = envelope
            .get("result")
            .cloned()
            .ok_or_else(|| LedgerError::ParseResponse("missing result object".to_string()))?;

        if result.get("status").and_then(|s| s.as_str()) == Some("error") {
            let code = result
                .get("error")
                .and_then(|e| e.as_str())
                .unwrap_or("unknown")
                .to_string();
            let message = result
                .get("error_message")
                .and_then(|m| m.as_str())
                .unwrap_or_default()
                .to_string();
            return Err(LedgerError::Rpc { code, message });
        }

        Ok(result)
    }

    /// Account info against the validated ledger, signer lists included.
    pub async fn account_info(&self, account: &str) -> Result<AccountData, LedgerError> {
        let result = self
            .request(
                "account_info",
                json!({
                    "account": account,
                    "ledger_index": "validated",
                    "signer_lists": true,
                }),
            )
            .await?;

        let account_data = result
            .get("account_data")
            .cloned()
            .ok_or_else(|| LedgerError::ParseResponse("missing account_data".to_string()))?;

        serde_json::from_value(account_data)
            .map_err(|e| LedgerError::ParseResponse(e.to_string()))
    }

    /// The account's signer list, or `None` when no list is configured.
    pub async fn signer_list(&self, account: &str) -> Result<Option<SignerListQuorum>, LedgerError> {
        let data = self.account_info(account).await?;
        Ok(data
            .signer_lists
            .into_iter()
            .next()
            .map(|list| list.into_quorum())
            .filter(|q| !q.is_empty()))
    }

    /// Open-ledger fee in drops.
    pub async fn open_ledger_fee(&self) -> Result<u64, LedgerError> {
        let result = self.request("fee", json!({})).await?;
        let drops = result
            .get("drops")
            .cloned()
            .ok_or_else(|| LedgerError::ParseResponse("missing drops".to_string()))?;
        let drops: FeeDrops =
            serde_json::from_value(drops).map_err(|e| LedgerError::ParseResponse(e.to_string()))?;
        drops
            .open_ledger_fee
            .parse()
            .map_err(|e| LedgerError::ParseResponse(format!("invalid fee drops: {}", e)))
    }

    /// Index of the current in-progress ledger.
    pub async fn current_ledger_index(&self) -> Result<u32, LedgerError> {
        let result = self.request("ledger_current", json!({})).await?;
        result
            .get("ledger_current_index")
            .and_then(|i| i.as_u64())
            .map(|i| i as u32)
            .ok_or_else(|| LedgerError::ParseResponse("missing ledger_current_index".to_string()))
    }

    /// Submit an already-signed transaction blob.
    pub async fn submit(&self, tx_blob: &str) -> Result<SubmitResponse, LedgerError> {
        let result = self
            .request("submit", json!({ "tx_blob": tx_blob }))
            .await?;
        serde_json::from_value(result).map_err(|e| LedgerError::ParseResponse(e.to_string()))
    }

    /// Submit a multisigned transaction as JSON.
    pub async fn submit_multisigned(
        &self,
        tx: &EscrowTransaction,
    ) -> Result<SubmitResponse, LedgerError> {
        let tx_json = serde_json::to_value(tx)
            .map_err(|e| LedgerError::ParseResponse(e.to_string()))?;
        let result = self
            .request("submit_multisigned", json!({ "tx_json": tx_json }))
            .await?;
        serde_json::from_value(result).map_err(|e| LedgerError::ParseResponse(e.to_string()))
    }

    /// Escrow ledger entry for (owner, offer_sequence) in the validated
    /// ledger. `entryNotFound` is a normal outcome and maps to `None`.
    pub async fn escrow_entry(
        &self,
        owner: &str,
        offer_sequence: u32,
    ) -> Result<Option<EscrowEntryView>, LedgerError> {
        let result = self
            .request(
                "ledger_entry",
                json!({
                    "escrow": {
                        "owner": owner,
                        "seq": offer_sequence,
                    },
                    "ledger_index": "validated",
                }),
            )
            .await;

        let result = match result {
            Ok(r) => r,
            Err(LedgerError::Rpc { ref code, .. }) if code == "entryNotFound" => return Ok(None),
            Err(e) => return Err(e),
        };

        let node = result
            .get("node")
            .cloned()
            .ok_or_else(|| LedgerError::ParseResponse("missing node".to_string()))?;
        let entry: EscrowEntryView =
            serde_json::from_value(node).map_err(|e| LedgerError::ParseResponse(e.to_string()))?;
        Ok(Some(entry))
    }

    /// Transaction record by hash, passed through with its `validated`
    /// flag.
    pub async fn transaction(&self, hash: &str) -> Result<TransactionRecord, LedgerError> {
        let result = self
            .request("tx", json!({ "transaction": hash }))
            .await?;
        let validated = result
            .get("validated")
            .and_then(|v| v.as_bool())
            .unwrap_or(false);
        Ok(TransactionRecord {
            hash: TxHash::from(hash),
            validated,
            record: result,
        })
    }

    /// Autofill values for a transaction: open-ledger fee (scaled for
    /// multisigned submissions), next account sequence, and the expiry
    /// ledger bound.
    pub async fn autofill_values(
        &self,
        account: &str,
        signer_count: usize,
    ) -> Result<escrow_types::AutofillValues, LedgerError> {
        let fee = self.open_ledger_fee().await?;
        // rippled prices a multisigned transaction at (1 + N) times the
        // reference fee.
        let fee = fee * (1 + signer_count as u64);
        let sequence = self.account_info(account).await?.sequence;
        let last_ledger_sequence = self.current_ledger_index().await? + LAST_LEDGER_OFFSET;
        Ok(escrow_types::AutofillValues {
            fee_drops: fee.to_string(),
            sequence,
            last_ledger_sequence,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_parsing() {
        assert_eq!(LedgerNetwork::parse("mainnet"), LedgerNetwork::Mainnet);
        assert_eq!(LedgerNetwork::parse("testnet"), LedgerNetwork::Testnet);
        assert_eq!(LedgerNetwork::parse("devnet"), LedgerNetwork::Devnet);
        assert_eq!(LedgerNetwork::parse("unknown"), LedgerNetwork::Testnet); // Default
        assert_eq!(
            LedgerNetwork::parse("https://xrpl.example:51234/"),
            LedgerNetwork::Custom("https://xrpl.example:51234/".to_string())
        );
    }

    #[test]
    fn test_network_urls() {
        assert_eq!(
            LedgerNetwork::Mainnet.json_rpc_url(),
            "https://s1.ripple.com:51234/"
        );
        assert_eq!(
            LedgerNetwork::Testnet.json_rpc_url(),
            "https://s.altnet.rippletest.net:51234/"
        );
        assert!(LedgerNetwork::Custom("http://localhost:5005/".to_string())
            .explorer_url()
            .is_none());
    }

    #[test]
    fn test_transport_error_classification() {
        assert!(LedgerError::ApiRequest("connection refused".to_string()).is_transport());
        assert!(LedgerError::ApiError {
            status: 502,
            body: String::new()
        }
        .is_transport());
        assert!(!LedgerError::Rpc {
            code: "actNotFound".to_string(),
            message: String::new()
        }
        .is_transport());
    }

    #[test]
    fn test_explorer_tx_url() {
        let client = JsonRpcClient::new(LedgerNetwork::Testnet);
        assert_eq!(
            client.tx_url("ABC123"),
            "https://testnet.xrpl.org/transactions/ABC123"
        );
    }
}
