//! WebSocket wire messages

use serde::{Deserialize, Serialize};

use crate::types::Reading;

/// Events pushed to connected clients.
///
/// Serialized with an internal `type` tag, so a temperature tick goes out
/// as `{"type":"temp_update","temperature":45.23}`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerEvent {
    /// One sampling tick
    TempUpdate { temperature: f64 },
}

impl From<Reading> for ServerEvent {
    fn from(reading: Reading) -> Self {
        ServerEvent::TempUpdate {
            temperature: reading.temperature,
        }
    }
}
