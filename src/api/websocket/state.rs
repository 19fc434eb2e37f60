//! WebSocket application state

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tracing::info;

use super::broadcaster::Broadcaster;
use crate::sampler::run_sampling_loop;
use crate::sensor::SensorReader;

/// Shared application state for WebSocket connections.
///
/// One instance is created at process start and injected into the axum
/// router; there are no ambient globals. The sampler-started flag lives
/// here so the check-and-start on first connection is atomic across
/// concurrently arriving clients.
pub struct AppState {
    /// Fan-out registry of connected subscribers
    pub broadcaster: Broadcaster,

    /// The temperature source handed to the sampling loop
    sensor: Arc<dyn SensorReader>,

    /// Interval between sampling ticks
    sample_interval: Duration,

    /// Whether the sampling loop has been spawned. Set once, never reset;
    /// the loop runs for the remainder of the process lifetime.
    sampler_started: Mutex<bool>,
}

impl AppState {
    /// Create state around the given sensor and sampling interval
    pub fn new(sensor: Arc<dyn SensorReader>, sample_interval: Duration) -> Self {
        Self {
            broadcaster: Broadcaster::new(),
            sensor,
            sample_interval,
            sampler_started: Mutex::new(false),
        }
    }

    /// Spawn the sampling loop if it is not already running.
    ///
    /// Called on every new connection. The flag check and the spawn happen
    /// under one lock, so N simultaneous first connections still produce
    /// exactly one loop. Returns whether this call performed the spawn.
    pub fn ensure_sampler_started(self: &Arc<Self>) -> bool {
        let mut started = self.sampler_started.lock();
        if *started {
            return false;
        }
        *started = true;

        let state = Arc::clone(self);
        let sensor = Arc::clone(&self.sensor);
        let interval = self.sample_interval;
        info!(interval_ms = interval.as_millis() as u64, "starting sampling loop");
        tokio::spawn(async move {
            run_sampling_loop(state, sensor, interval).await;
        });
        true
    }

    /// Whether the sampling loop has been started
    pub fn sampler_started(&self) -> bool {
        *self.sampler_started.lock()
    }
}
