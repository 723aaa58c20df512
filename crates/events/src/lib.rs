//! SantaVerse change-event infrastructure.
//!
//! Provides the building blocks for the realtime change feed:
//!
//! - [`ChangeBus`] -- in-process publish/subscribe hub backed by
//!   `tokio::sync::broadcast`.
//! - [`ChangeEvent`] -- the canonical table-change envelope pushed to
//!   dashboard clients so they can invalidate their per-table caches.

pub mod bus;

pub use bus::{ChangeBus, ChangeEvent, ChangeOp};
