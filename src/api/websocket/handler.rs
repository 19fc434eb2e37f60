//! WebSocket connection handler

use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use tracing::info;

use super::events::ServerEvent;
use super::state::AppState;

/// WebSocket upgrade handler
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<Arc<AppState>>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Handle an individual WebSocket connection
async fn handle_socket(mut socket: WebSocket, state: Arc<AppState>) {
    let (id, mut rx) = state.broadcaster.register().await;
    info!(connection = id, "client connected");

    // First connection kicks off the sampling loop; later ones are no-ops
    state.ensure_sampler_started();

    loop {
        tokio::select! {
            // Forward broadcast readings to the client
            reading = rx.recv() => {
                match reading {
                    Some(reading) => {
                        let event = ServerEvent::from(reading);
                        if let Ok(json) = serde_json::to_string(&event) {
                            if socket.send(Message::Text(json)).await.is_err() {
                                break; // Client disconnected
                            }
                        }
                    }
                    None => break, // Unregistered by a failed broadcast
                }
            }

            // Drain client traffic; no application messages are defined,
            // but the transport still needs ping/close handling
            msg = socket.recv() => {
                match msg {
                    Some(Ok(Message::Ping(data))) => {
                        let _ = socket.send(Message::Pong(data)).await;
                    }
                    Some(Ok(Message::Close(_))) => break,
                    Some(Ok(_)) => {} // Ignore text/binary/pong
                    Some(Err(_)) => break, // WebSocket error
                    None => break, // Client disconnected
                }
            }
        }
    }

    state.broadcaster.unregister(id).await;
    info!(connection = id, "client disconnected");
}
