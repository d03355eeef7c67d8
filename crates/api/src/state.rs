//! Shared application state for the API server

use escrow_orchestrator::EscrowOrchestrator;
use escrow_xrpl::JsonRpcClient;

/// Shared application state passed to all handlers
#[derive(Clone)]
pub struct AppState {
    /// Escrow orchestrator bound to the live JSON-RPC gateway
    pub orchestrator: EscrowOrchestrator<JsonRpcClient>,
}

impl AppState {
    /// Create new application state
    pub fn new(orchestrator: EscrowOrchestrator<JsonRpcClient>) -> Self {
        Self { orchestrator }
    }
}
