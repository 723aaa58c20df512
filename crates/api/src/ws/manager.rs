use std::collections::HashMap;

use axum::body::Bytes;
use axum::extract::ws::Message;
use santaverse_core::types::DbId;
use tokio::sync::{mpsc, RwLock};
use uuid::Uuid;

/// Channel sender half for pushing messages to a WebSocket connection.
pub type WsSender = mpsc::UnboundedSender<Message>;

/// Identifier handed out when a connection registers; needed to remove it.
pub type ConnId = Uuid;

/// Registry of active WebSocket connections, keyed by owner.
///
/// The change feed only ever addresses connections by owner, so the
/// registry is a two-level map: owner id to that owner's open sockets.
/// A single owner may hold several connections (multiple dashboard tabs).
///
/// Thread-safe via interior `RwLock`; wrap in `Arc` to share.
pub struct WsManager {
    by_owner: RwLock<HashMap<DbId, HashMap<ConnId, WsSender>>>,
}

impl WsManager {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            by_owner: RwLock::new(HashMap::new()),
        }
    }

    /// Register a connection for `owner_id`.
    ///
    /// Returns the connection id (pass it back to [`remove`](Self::remove)
    /// on disconnect) and the receiver half of the outbound channel, which
    /// the caller drains into the WebSocket sink.
    pub async fn add(&self, owner_id: DbId) -> (ConnId, mpsc::UnboundedReceiver<Message>) {
        let conn_id = Uuid::new_v4();
        let (tx, rx) = mpsc::unbounded_channel();
        self.by_owner
            .write()
            .await
            .entry(owner_id)
            .or_default()
            .insert(conn_id, tx);
        (conn_id, rx)
    }

    /// Deregister a connection. Empty owner buckets are dropped.
    pub async fn remove(&self, owner_id: DbId, conn_id: ConnId) {
        let mut by_owner = self.by_owner.write().await;
        if let Some(conns) = by_owner.get_mut(&owner_id) {
            conns.remove(&conn_id);
            if conns.is_empty() {
                by_owner.remove(&owner_id);
            }
        }
    }

    /// Push a message to every connection the owner has open.
    ///
    /// A connection whose channel has closed is skipped; its receive loop
    /// removes it on the next iteration. Returns how many connections the
    /// message was queued for.
    pub async fn send_to_user(&self, owner_id: DbId, message: Message) -> usize {
        let by_owner = self.by_owner.read().await;
        let Some(conns) = by_owner.get(&owner_id) else {
            return 0;
        };
        let mut queued = 0;
        for sender in conns.values() {
            if sender.send(message.clone()).is_ok() {
                queued += 1;
            }
        }
        queued
    }

    /// Push a message to every connection regardless of owner.
    pub async fn broadcast(&self, message: Message) {
        let by_owner = self.by_owner.read().await;
        for sender in by_owner.values().flat_map(HashMap::values) {
            let _ = sender.send(message.clone());
        }
    }

    /// Total number of open connections across all owners.
    pub async fn connection_count(&self) -> usize {
        self.by_owner.read().await.values().map(HashMap::len).sum()
    }

    /// Queue a Ping frame on every connection.
    pub async fn ping_all(&self) {
        self.broadcast(Message::Ping(Bytes::new())).await;
    }

    /// Queue a Close frame on every connection, then clear the registry.
    ///
    /// Called during graceful shutdown so clients see a clean close rather
    /// than a dropped socket.
    pub async fn shutdown_all(&self) {
        let mut by_owner = self.by_owner.write().await;
        let count: usize = by_owner.values().map(HashMap::len).sum();
        for sender in by_owner.values().flat_map(HashMap::values) {
            let _ = sender.send(Message::Close(None));
        }
        by_owner.clear();
        tracing::info!(count, "Closed all WebSocket connections");
    }
}

impl Default for WsManager {
    fn default() -> Self {
        Self::new()
    }
}
