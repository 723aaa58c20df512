//! In-process change bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`ChangeBus`] is the central publish/subscribe hub for [`ChangeEvent`]s.
//! It is designed to be shared via `Arc<ChangeBus>` across the application.

use chrono::{DateTime, Utc};
use santaverse_core::types::DbId;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

// ---------------------------------------------------------------------------
// ChangeEvent
// ---------------------------------------------------------------------------

/// The kind of row mutation a [`ChangeEvent`] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeOp {
    Insert,
    Update,
    Delete,
}

/// A committed row change on one of the entity tables.
///
/// Published after the database write succeeds, never before. Dashboard
/// clients key their cache invalidation on [`table`](Self::table).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeEvent {
    /// Table name, e.g. `"children"`.
    pub table: String,

    /// What happened to the row.
    pub op: ChangeOp,

    /// Database id of the affected row.
    pub entity_id: DbId,

    /// Owner the row belongs to. The feed only delivers the event to this
    /// owner's connections.
    pub owner_id: DbId,

    /// When the event was created (UTC).
    pub timestamp: DateTime<Utc>,
}

impl ChangeEvent {
    /// Create an event for a freshly inserted row.
    pub fn insert(table: impl Into<String>, entity_id: DbId, owner_id: DbId) -> Self {
        Self::new(table, ChangeOp::Insert, entity_id, owner_id)
    }

    /// Create an event for an updated row.
    pub fn update(table: impl Into<String>, entity_id: DbId, owner_id: DbId) -> Self {
        Self::new(table, ChangeOp::Update, entity_id, owner_id)
    }

    /// Create an event for a deleted row.
    pub fn delete(table: impl Into<String>, entity_id: DbId, owner_id: DbId) -> Self {
        Self::new(table, ChangeOp::Delete, entity_id, owner_id)
    }

    fn new(table: impl Into<String>, op: ChangeOp, entity_id: DbId, owner_id: DbId) -> Self {
        Self {
            table: table.into(),
            op,
            entity_id,
            owner_id,
            timestamp: Utc::now(),
        }
    }
}

// ---------------------------------------------------------------------------
// ChangeBus
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 1024;

/// In-process fan-out change bus.
///
/// Wraps a [`broadcast::Sender`] so that any number of subscribers can
/// independently receive every published [`ChangeEvent`].
///
/// # Usage
///
/// ```rust
/// use santaverse_events::{ChangeBus, ChangeEvent};
///
/// let bus = ChangeBus::default();
/// let mut rx = bus.subscribe();
///
/// bus.publish(ChangeEvent::insert("children", 1, 1));
/// ```
pub struct ChangeBus {
    sender: broadcast::Sender<ChangeEvent>,
}

impl ChangeBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full, the oldest un-consumed messages are dropped
    /// and slow receivers will observe a `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    ///
    /// If there are no active subscribers the event is silently dropped;
    /// the feed promises no replay.
    pub fn publish(&self, event: ChangeEvent) {
        // Ignore the SendError -- it only means there are zero receivers.
        let _ = self.sender.send(event);
    }

    /// Subscribe to all events published on this bus.
    pub fn subscribe(&self) -> broadcast::Receiver<ChangeEvent> {
        self.sender.subscribe()
    }
}

impl Default for ChangeBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn publish_and_receive_single_subscriber() {
        let bus = ChangeBus::default();
        let mut rx = bus.subscribe();

        bus.publish(ChangeEvent::update("gifts", 42, 7));

        let received = rx.recv().await.expect("should receive the event");
        assert_eq!(received.table, "gifts");
        assert_eq!(received.op, ChangeOp::Update);
        assert_eq!(received.entity_id, 42);
        assert_eq!(received.owner_id, 7);
    }

    #[tokio::test]
    async fn multiple_subscribers_receive_same_event() {
        let bus = ChangeBus::default();
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.publish(ChangeEvent::delete("elves", 3, 1));

        let e1 = rx1.recv().await.expect("subscriber 1 should receive");
        let e2 = rx2.recv().await.expect("subscriber 2 should receive");

        assert_eq!(e1.table, "elves");
        assert_eq!(e2.table, "elves");
        assert_eq!(e1.op, ChangeOp::Delete);
    }

    #[test]
    fn publish_with_no_subscribers_does_not_panic() {
        let bus = ChangeBus::default();
        // No subscribers -- this must not panic.
        bus.publish(ChangeEvent::insert("tasks", 1, 1));
    }

    #[test]
    fn op_serializes_lowercase() {
        let event = ChangeEvent::insert("children", 5, 2);
        let json = serde_json::to_value(&event).expect("event should serialize");
        assert_eq!(json["op"], "insert");
        assert_eq!(json["table"], "children");
        assert_eq!(json["entity_id"], 5);
    }
}
