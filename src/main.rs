//! ONVO webhook receiver - Main Entry Point
//!
//! Serves the webhook endpoint configured through `ONVO__*` environment
//! variables.

use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use onvo_pay::adapters::http::webhook::{webhook_router, WebhookAppState};
use onvo_pay::config::AppConfig;
use onvo_pay::WebhookDispatcher;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Load configuration (reads .env first)
    let config = AppConfig::load()?;
    config.validate()?;

    // Initialize tracing; RUST_LOG overrides the configured filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));
    if config.is_production() {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    info!(
        version = env!("CARGO_PKG_VERSION"),
        api_client_configured = config.client.is_some(),
        "Starting ONVO webhook receiver"
    );

    let state = WebhookAppState::new(WebhookDispatcher::new());
    let app = webhook_router(&config.server.webhook_path)
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(address = %addr, path = %config.server.webhook_path, "Server listening");

    let shutdown_signal = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install CTRL+C signal handler");
        }
        info!("Received shutdown signal");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("Server shutdown complete");
    Ok(())
}
