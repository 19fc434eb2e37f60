//! Reading broadcaster and connection registry
//!
//! Tracks every connected subscriber and fans each published reading out to
//! all of them. Each subscriber gets its own unbounded mpsc channel, so
//! delivery order per connection is exactly publish order, and one slow or
//! broken subscriber cannot hold up the rest.
//!
//! # Lifecycle
//!
//! A connection is registered when the WebSocket handler accepts it and
//! unregistered when the handler exits or when a send to it fails. The
//! registry therefore never holds a stale handle: a failing sender is
//! removed during the same broadcast that discovered it.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::sync::RwLock;
use tracing::debug;

use crate::types::Reading;

/// Opaque identity of one subscriber connection
pub type ConnectionId = u64;

/// Fan-out hub for sampled readings
pub struct Broadcaster {
    connections: RwLock<HashMap<ConnectionId, UnboundedSender<Reading>>>,
    next_id: AtomicU64,
}

impl Broadcaster {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            connections: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(0),
        }
    }

    /// Add a new subscriber and return its id plus the receiving end of
    /// its delivery channel
    pub async fn register(&self) -> (ConnectionId, UnboundedReceiver<Reading>) {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let (tx, rx) = mpsc::unbounded_channel();
        self.connections.write().await.insert(id, tx);
        debug!(connection = id, "subscriber registered");
        (id, rx)
    }

    /// Remove a subscriber. No-op if the id was already removed or never
    /// registered, so disconnect paths may call this unconditionally.
    pub async fn unregister(&self, id: ConnectionId) {
        if self.connections.write().await.remove(&id).is_some() {
            debug!(connection = id, "subscriber unregistered");
        }
    }

    /// Deliver `reading` to every registered subscriber.
    ///
    /// Sends are isolated: a subscriber whose channel is closed is removed
    /// from the registry and the fan-out continues with the remainder.
    /// Cross-connection delivery order is unspecified.
    pub async fn broadcast(&self, reading: Reading) {
        let targets: Vec<(ConnectionId, UnboundedSender<Reading>)> = {
            let connections = self.connections.read().await;
            connections
                .iter()
                .map(|(id, tx)| (*id, tx.clone()))
                .collect()
        };

        let mut dead = Vec::new();
        for (id, tx) in targets {
            if tx.send(reading).is_err() {
                dead.push(id);
            }
        }

        for id in dead {
            debug!(connection = id, "dropping broken subscriber");
            self.unregister(id).await;
        }
    }

    /// Number of currently registered subscribers
    pub async fn connection_count(&self) -> usize {
        self.connections.read().await.len()
    }
}

impl Default for Broadcaster {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_register_assigns_distinct_ids() {
        let broadcaster = Broadcaster::new();
        let (a, _rx_a) = broadcaster.register().await;
        let (b, _rx_b) = broadcaster.register().await;
        assert_ne!(a, b);
        assert_eq!(broadcaster.connection_count().await, 2);
    }

    #[tokio::test]
    async fn test_unregister_is_idempotent() {
        let broadcaster = Broadcaster::new();
        let (id, _rx) = broadcaster.register().await;

        broadcaster.unregister(id).await;
        assert_eq!(broadcaster.connection_count().await, 0);

        // Second removal and removal of a never-registered id are no-ops
        broadcaster.unregister(id).await;
        broadcaster.unregister(9999).await;
        assert_eq!(broadcaster.connection_count().await, 0);
    }

    #[tokio::test]
    async fn test_broadcast_preserves_per_connection_order() {
        let broadcaster = Broadcaster::new();
        let (_id, mut rx) = broadcaster.register().await;

        for temp in [1.0, 2.0, 3.0] {
            broadcaster.broadcast(Reading::now(temp)).await;
        }

        assert_eq!(rx.recv().await.unwrap().temperature, 1.0);
        assert_eq!(rx.recv().await.unwrap().temperature, 2.0);
        assert_eq!(rx.recv().await.unwrap().temperature, 3.0);
    }

    #[tokio::test]
    async fn test_broadcast_isolates_broken_subscriber() {
        let broadcaster = Broadcaster::new();
        let (_healthy, mut rx_healthy) = broadcaster.register().await;
        let (broken, rx_broken) = broadcaster.register().await;

        // Simulate a dead transport by dropping the receiving end
        drop(rx_broken);

        broadcaster.broadcast(Reading::now(45.23)).await;

        // The healthy subscriber still got the reading
        let reading = rx_healthy.recv().await.unwrap();
        assert!((reading.temperature - 45.23).abs() < 1e-9);

        // The broken one was removed, the healthy one was not
        assert_eq!(broadcaster.connection_count().await, 1);
        broadcaster.unregister(broken).await; // still a no-op
        assert_eq!(broadcaster.connection_count().await, 1);
    }

    #[tokio::test]
    async fn test_broadcast_with_no_subscribers_is_noop() {
        let broadcaster = Broadcaster::new();
        broadcaster.broadcast(Reading::now(20.0)).await;
        assert_eq!(broadcaster.connection_count().await, 0);
    }
}
