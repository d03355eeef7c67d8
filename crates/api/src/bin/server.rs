//! Escrow API Server
//!
//! HTTP server for the XRP Ledger escrow service. Prepares unsigned
//! escrow transactions, assembles multisigned payloads, submits
//! signed transactions, and reports escrow status.

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;

use escrow_api::{start_server, AppState};
use escrow_orchestrator::EscrowOrchestrator;
use escrow_xrpl::{JsonRpcClient, LedgerNetwork};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    info!("Starting Escrow API Server");

    // Load configuration from environment
    let config = load_config()?;

    info!("Initializing ledger client for {:?}", config.network);
    let client = JsonRpcClient::new(config.network.clone());
    let orchestrator = EscrowOrchestrator::new(Arc::new(client));
    let state = AppState::new(orchestrator);

    let addr: SocketAddr = config.listen_addr.parse()?;

    info!("Server configuration:");
    info!("  Listen Address: {}", addr);
    info!("  Ledger Network: {:?}", config.network);
    info!(
        "  CORS Origins: {}",
        if config.cors_origins.is_empty() {
            "any".to_string()
        } else {
            config.cors_origins.join(", ")
        }
    );

    start_server(state, addr, &config.cors_origins).await?;

    info!("Shutdown complete");
    Ok(())
}

#[derive(Debug)]
struct Config {
    listen_addr: String,
    network: LedgerNetwork,
    cors_origins: Vec<String>,
}

fn load_config() -> Result<Config> {
    let listen_addr =
        std::env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let network_str = std::env::var("XRPL_NETWORK").unwrap_or_else(|_| "testnet".to_string());
    let network = LedgerNetwork::parse(&network_str);

    let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
        .unwrap_or_default()
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    Ok(Config {
        listen_addr,
        network,
        cors_origins,
    })
}
