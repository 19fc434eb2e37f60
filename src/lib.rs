//! Thermoview Server
//!
//! A small web service that samples the CPU temperature on a fixed interval
//! and streams every reading to all connected WebSocket clients.
//!
//! # Features
//!
//! - **Live fan-out**: one background sampling loop, any number of subscribers
//! - **Failure isolation**: a bad sensor read or a broken client never stops
//!   the loop or the other connections
//! - **Single-start**: the sampling loop is started exactly once, on the
//!   first client connection, no matter how many clients race to connect
//! - **Pluggable sensor**: the thermal-zone reader sits behind a trait so
//!   tests (and other platforms) can substitute their own source
//!
//! # Modules
//!
//! - `types`: Core data structures (Reading)
//! - `sensor`: The SensorReader trait and the thermal-zone implementation
//! - `sampler`: The periodic read-and-broadcast loop
//! - `api`: Axum HTTP router and the WebSocket endpoint
//! - `config`: Runtime configuration from environment variables
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use thermoview::api::http::create_router;
//! use thermoview::api::websocket::state::AppState;
//! use thermoview::config::ServerConfig;
//! use thermoview::sensor::ThermalZoneSensor;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig::from_env();
//!     let sensor = Arc::new(ThermalZoneSensor::new(&config.sensor_path));
//!     let state = Arc::new(AppState::new(sensor, config.sample_interval));
//!     let app = create_router(state);
//!     let listener = tokio::net::TcpListener::bind(config.bind_addr())
//!         .await
//!         .unwrap();
//!     axum::serve(listener, app).await.unwrap();
//! }
//! ```

pub mod api;
pub mod config;
pub mod sampler;
pub mod sensor;
pub mod types;

// Re-export commonly used items at crate root
pub use config::ServerConfig;
pub use sensor::{SensorReader, ThermalZoneSensor, SENTINEL_READING};
pub use types::{Reading, ServerResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
