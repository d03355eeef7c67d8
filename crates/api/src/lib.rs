//! HTTP surface for the escrow service.
//!
//! Exposes the escrow lifecycle under `/api/v1/escrow` plus a
//! `/health` probe. Every response body uses the
//! [`ApiResponse`](response::ApiResponse) envelope, including error
//! responses and the unmatched-route fallback.

use axum::http::{HeaderValue, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use std::net::SocketAddr;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

pub mod error;
pub mod response;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use response::ApiResponse;
pub use state::AppState;

/// Result type used by all route handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/escrow/create", post(routes::escrow::create_escrow))
        .route("/api/v1/escrow/finish", post(routes::escrow::finish_escrow))
        .route("/api/v1/escrow/cancel", post(routes::escrow::cancel_escrow))
        .route("/api/v1/escrow/submit", post(routes::escrow::submit_escrow))
        .route(
            "/api/v1/escrow/submit-multisig",
            post(routes::escrow::submit_multisig_escrow),
        )
        .route(
            "/api/v1/escrow/status/:owner/:sequence",
            get(routes::escrow::escrow_status),
        )
        .route(
            "/api/v1/escrow/transaction/:hash",
            get(routes::escrow::get_transaction),
        )
        .route("/health", get(health))
        .fallback(not_found)
        .with_state(state)
}

/// Build the CORS layer from an origin allow-list.
///
/// An empty list allows any origin, for local development.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }
    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();
    CorsLayer::new()
        .allow_origin(parsed)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Serve the API until ctrl-c is received
pub async fn start_server(
    state: AppState,
    addr: SocketAddr,
    cors_origins: &[String],
) -> anyhow::Result<()> {
    let app = router(state).layer(cors_layer(cors_origins));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("API server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("API server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        warn!("Unable to listen for shutdown signal: {}", e);
        return;
    }
    info!("Shutdown signal received");
}

async fn health() -> Json<ApiResponse<&'static str>> {
    Json(ApiResponse::ok("ok"))
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::<()>::failure("Route not found")),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_layer_accepts_valid_origins() {
        // Drops unparsable entries instead of failing startup.
        let _ = cors_layer(&[
            "https://example.com".to_string(),
            "not a header value\u{0}".to_string(),
        ]);
    }

    #[tokio::test]
    async fn test_health_returns_ok_envelope() {
        let Json(envelope) = health().await;
        assert!(envelope.success);
        assert_eq!(envelope.data, Some("ok"));
    }
}
