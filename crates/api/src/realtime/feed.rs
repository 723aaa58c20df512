//! Change-bus-to-WebSocket forwarding.
//!
//! [`ChangeFeed`] subscribes to the [`ChangeBus`](santaverse_events::ChangeBus)
//! and pushes each committed row change to the owner's connected dashboard
//! clients, which invalidate their per-table caches and refetch.

use std::sync::Arc;

use axum::extract::ws::{Message, Utf8Bytes};
use santaverse_events::ChangeEvent;
use tokio::sync::broadcast;

use crate::ws::WsManager;

/// Forwards change events to the owning user's WebSocket connections.
pub struct ChangeFeed {
    ws_manager: Arc<WsManager>,
}

impl ChangeFeed {
    /// Create a new feed over the given WebSocket manager.
    pub fn new(ws_manager: Arc<WsManager>) -> Self {
        Self { ws_manager }
    }

    /// Run the main forwarding loop.
    ///
    /// Consumes events from `receiver` until the channel is closed (i.e.
    /// the [`ChangeBus`](santaverse_events::ChangeBus) is dropped). Lagged
    /// receivers skip the dropped events and keep going; the feed promises
    /// no replay.
    pub async fn run(self, mut receiver: broadcast::Receiver<ChangeEvent>) {
        loop {
            match receiver.recv().await {
                Ok(event) => self.forward(&event).await,
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!(skipped = n, "Change feed lagged");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::info!("Change bus closed, change feed shutting down");
                    break;
                }
            }
        }
    }

    /// Serialize one event and deliver it to the owner's connections.
    async fn forward(&self, event: &ChangeEvent) {
        let payload = serde_json::json!({
            "type": "change",
            "table": event.table,
            "op": event.op,
            "id": event.entity_id,
            "at": event.timestamp,
        });

        // Serializing a json! literal cannot fail.
        let text = payload.to_string();
        let sent = self
            .ws_manager
            .send_to_user(event.owner_id, Message::Text(Utf8Bytes::from(text)))
            .await;

        tracing::debug!(
            table = %event.table,
            op = ?event.op,
            entity_id = event.entity_id,
            owner_id = event.owner_id,
            sent,
            "Forwarded change event"
        );
    }
}
