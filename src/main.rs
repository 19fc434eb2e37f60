//! Thermoview Server - Binary Entry Point
//!
//! Binds the HTTP listener and serves the client page plus the `/ws`
//! temperature stream. The sampling loop itself is started lazily by the
//! first WebSocket connection.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use thermoview::api::http::create_router;
use thermoview::api::websocket::state::AppState;
use thermoview::config::ServerConfig;
use thermoview::sensor::ThermalZoneSensor;
use thermoview::types::ServerResult;

#[tokio::main]
async fn main() -> ServerResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env();
    let sensor = Arc::new(ThermalZoneSensor::new(&config.sensor_path));
    let state = Arc::new(AppState::new(sensor, config.sample_interval));
    let app = create_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(version = thermoview::VERSION, %addr, "thermoview listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolve when the process receives Ctrl-C
async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown signal received");
    }
}
