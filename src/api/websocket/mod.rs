//! WebSocket module for live temperature updates
//!
//! Provides the `/ws` endpoint. Every connected client receives a
//! `temp_update` event on each sampling tick.

pub mod broadcaster;
pub mod events;
pub mod handler;
pub mod state;

// Re-export commonly used items
pub use broadcaster::{Broadcaster, ConnectionId};
pub use state::AppState;
