//! Periodic sampling loop
//!
//! One detached task that reads the sensor, broadcasts the reading to all
//! current subscribers, sleeps, and repeats for the lifetime of the process.
//! There is intentionally no shutdown path: once started on the first
//! connection, the loop only stops when the process does.
//!
//! Every tick is broadcast, including unchanged values; subscribers get a
//! steady heartbeat of readings rather than deltas.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::{sleep, timeout};
use tracing::error;

use crate::api::websocket::state::AppState;
use crate::sensor::{SensorReader, SENTINEL_READING};
use crate::types::Reading;

/// Floor for the per-read timeout, so very short test intervals still
/// leave the read enough time to complete
const MIN_READ_TIMEOUT: Duration = Duration::from_millis(100);

/// Run the read-and-broadcast cycle forever.
///
/// A failed or hung read never stops the loop: the read runs on the
/// blocking pool under a timeout of half the sampling interval, and any
/// failure is logged and replaced with the sentinel reading before the
/// normal sleep and the next tick.
pub async fn run_sampling_loop(
    state: Arc<AppState>,
    sensor: Arc<dyn SensorReader>,
    interval: Duration,
) {
    let read_timeout = (interval / 2).max(MIN_READ_TIMEOUT);

    loop {
        let temperature = sample_once(&sensor, read_timeout).await;
        state.broadcaster.broadcast(Reading::now(temperature)).await;
        sleep(interval).await;
    }
}

/// Take one bounded sample, falling back to the sentinel on timeout or a
/// panicked reader.
async fn sample_once(sensor: &Arc<dyn SensorReader>, read_timeout: Duration) -> f64 {
    let sensor = Arc::clone(sensor);
    let read = tokio::task::spawn_blocking(move || sensor.read());

    match timeout(read_timeout, read).await {
        Ok(Ok(value)) => value,
        Ok(Err(e)) => {
            error!(error = %e, "sensor read task failed");
            SENTINEL_READING
        }
        Err(_) => {
            error!(timeout_ms = read_timeout.as_millis() as u64, "sensor read timed out");
            SENTINEL_READING
        }
    }
}
