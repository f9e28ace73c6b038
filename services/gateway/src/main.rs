mod config;
mod error;
mod extract;
mod handlers;
mod models;
mod router;
mod state;

use config::GatewayConfig;
use fee_engine::{FeeEngine, FeeEngineConfig};
use router::create_router;
use state::AppState;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Initialize tracing, RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting stamp duty gateway");

    let config = GatewayConfig::from_env()?;
    let engine = FeeEngine::with_config(FeeEngineConfig {
        history_capacity: config.history_capacity,
        ..FeeEngineConfig::default()
    })?;
    tracing::info!(
        schedule_version = %engine.schedule().version,
        history_capacity = config.history_capacity,
        "Fee engine ready"
    );

    let state = AppState::new(engine);
    let app = create_router(state);

    let listener = TcpListener::bind(config.listen_addr).await?;
    tracing::info!("Listening on {}", config.listen_addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
