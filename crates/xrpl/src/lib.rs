//! XRP Ledger integration for the escrow service.
//!
//! This crate provides:
//! - JSON-RPC client for an XRPL HTTP endpoint (`JsonRpcClient`)
//! - Network presets (mainnet/testnet/devnet) with explicit-URL override
//! - The `LedgerGateway` trait the orchestrator is programmed against
//! - Wire-level response types for the RPC methods in use
//!
//! # Connection model
//!
//! The client holds a single reqwest pool: the underlying connection
//! is established lazily on first use, shared across concurrent
//! requests, and re-established transparently when found dead. No
//! request is ever retried; a transport failure surfaces immediately
//! as `LedgerError::ApiRequest`.

pub mod client;
pub mod gateway;
pub mod types;

pub use client::{JsonRpcClient, LedgerError, LedgerNetwork};
pub use gateway::LedgerGateway;
pub use types::{AccountData, FeeDrops, SignerListObject, SubmitResponse};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
