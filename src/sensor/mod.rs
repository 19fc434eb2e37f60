//! Sensor reading
//!
//! All fallible I/O for sampling lives here. The contract is deliberately
//! infallible from the caller's point of view: `read()` returns the sentinel
//! `0.0` on any underlying failure and logs the condition, so the sampling
//! loop never has to handle a read error.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

/// Placeholder value meaning "sensor unavailable"
pub const SENTINEL_READING: f64 = 0.0;

/// Default Linux thermal zone exposing the CPU temperature
pub const DEFAULT_THERMAL_ZONE_PATH: &str = "/sys/class/thermal/thermal_zone0/temp";

/// A source of temperature samples.
///
/// Implementations must never panic and never block for long; on failure
/// they return [`SENTINEL_READING`].
pub trait SensorReader: Send + Sync {
    /// Read the current temperature in degrees Celsius
    fn read(&self) -> f64;
}

/// Reads the CPU temperature from a sysfs thermal zone file.
///
/// The file contains a single integer in milli-degrees Celsius
/// (e.g. `45230` for 45.23 °C).
pub struct ThermalZoneSensor {
    path: PathBuf,
}

impl ThermalZoneSensor {
    /// Create a sensor reading from the given thermal zone file
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl Default for ThermalZoneSensor {
    fn default() -> Self {
        Self::new(DEFAULT_THERMAL_ZONE_PATH)
    }
}

impl SensorReader for ThermalZoneSensor {
    fn read(&self) -> f64 {
        // A missing thermal zone is expected on some hosts, not an error.
        if !self.path.exists() {
            warn!(path = %self.path.display(), "thermal zone not present, reporting sentinel");
            return SENTINEL_READING;
        }

        match fs::read_to_string(&self.path) {
            Ok(content) => match content.trim().parse::<i64>() {
                // Convert milli-degrees to degrees Celsius
                Ok(milli) => milli as f64 / 1000.0,
                Err(e) => {
                    warn!(path = %self.path.display(), error = %e, "malformed sensor value");
                    SENTINEL_READING
                }
            },
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "failed to read sensor");
                SENTINEL_READING
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn sensor_with_content(content: &str) -> (ThermalZoneSensor, NamedTempFile) {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        (ThermalZoneSensor::new(file.path()), file)
    }

    #[test]
    fn test_read_missing_path_returns_sentinel() {
        let sensor = ThermalZoneSensor::new("/nonexistent/thermal_zone99/temp");
        assert_eq!(sensor.read(), SENTINEL_READING);
    }

    #[test]
    fn test_read_malformed_content_returns_sentinel() {
        let (sensor, _file) = sensor_with_content("not-a-number");
        assert_eq!(sensor.read(), SENTINEL_READING);
    }

    #[test]
    fn test_read_empty_content_returns_sentinel() {
        let (sensor, _file) = sensor_with_content("");
        assert_eq!(sensor.read(), SENTINEL_READING);
    }

    #[test]
    fn test_read_converts_milli_degrees() {
        let (sensor, _file) = sensor_with_content("45230");
        assert!((sensor.read() - 45.23).abs() < 1e-9);
    }

    #[test]
    fn test_read_trims_trailing_newline() {
        // sysfs values end with a newline
        let (sensor, _file) = sensor_with_content("38000\n");
        assert!((sensor.read() - 38.0).abs() < 1e-9);
    }

    #[test]
    fn test_read_negative_value() {
        let (sensor, _file) = sensor_with_content("-5500");
        assert!((sensor.read() + 5.5).abs() < 1e-9);
    }
}
