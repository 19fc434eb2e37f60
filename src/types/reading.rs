//! A single sampled sensor value

use serde::{Deserialize, Serialize};

/// One temperature sample, immutable once produced.
///
/// The temperature is in degrees Celsius. A value of `0.0` is the sentinel
/// meaning "sensor unavailable" (see [`crate::sensor::SENTINEL_READING`]).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Temperature in degrees Celsius
    pub temperature: f64,

    /// Unix timestamp (seconds) when the sample was taken
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

impl Reading {
    /// Create a reading stamped with the current time
    pub fn now(temperature: f64) -> Self {
        Self {
            temperature,
            timestamp: Some(chrono::Utc::now().timestamp()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reading_now_is_stamped() {
        let reading = Reading::now(42.5);
        assert_eq!(reading.temperature, 42.5);
        assert!(reading.timestamp.is_some());
    }

    #[test]
    fn test_reading_serialization_skips_missing_timestamp() {
        let reading = Reading {
            temperature: 1.25,
            timestamp: None,
        };
        let json = serde_json::to_string(&reading).unwrap();
        assert!(!json.contains("timestamp"));
        assert!(json.contains("1.25"));
    }
}
