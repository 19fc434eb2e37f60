//! Runtime configuration
//!
//! All settings come from `THERMOVIEW_*` environment variables with sane
//! defaults; an unparsable value logs a warning and falls back to the
//! default rather than failing startup.

use std::env;
use std::time::Duration;

use tracing::warn;

use crate::sensor::DEFAULT_THERMAL_ZONE_PATH;

/// Default listen host (all interfaces)
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default listen port
pub const DEFAULT_PORT: u16 = 5000;

/// Default seconds between sampling ticks
pub const DEFAULT_INTERVAL_SECS: u64 = 2;

/// Server configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host to bind the listener on (`THERMOVIEW_HOST`)
    pub host: String,

    /// Port to bind the listener on (`THERMOVIEW_PORT`)
    pub port: u16,

    /// Thermal zone file to sample (`THERMOVIEW_SENSOR_PATH`)
    pub sensor_path: String,

    /// Interval between sampling ticks (`THERMOVIEW_INTERVAL_SECS`)
    pub sample_interval: Duration,
}

impl ServerConfig {
    /// Load configuration from the environment
    pub fn from_env() -> Self {
        let host = env::var("THERMOVIEW_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());

        let port = match env::var("THERMOVIEW_PORT") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                warn!(value = %raw, "invalid THERMOVIEW_PORT, using default");
                DEFAULT_PORT
            }),
            Err(_) => DEFAULT_PORT,
        };

        let sensor_path = env::var("THERMOVIEW_SENSOR_PATH")
            .unwrap_or_else(|_| DEFAULT_THERMAL_ZONE_PATH.to_string());

        let interval_secs = match env::var("THERMOVIEW_INTERVAL_SECS") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                warn!(value = %raw, "invalid THERMOVIEW_INTERVAL_SECS, using default");
                DEFAULT_INTERVAL_SECS
            }),
            Err(_) => DEFAULT_INTERVAL_SECS,
        };

        Self {
            host,
            port,
            sensor_path,
            sample_interval: Duration::from_secs(interval_secs),
        }
    }

    /// Address string for the TCP listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            sensor_path: DEFAULT_THERMAL_ZONE_PATH.to_string(),
            sample_interval: Duration::from_secs(DEFAULT_INTERVAL_SECS),
        }
    }
}
