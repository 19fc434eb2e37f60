//! Data types for the Thermoview Server

mod reading;

pub use reading::Reading;

/// Result type for fallible server setup (bind, serve)
pub type ServerResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;
