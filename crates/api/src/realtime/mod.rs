//! Realtime change feed: fans change-bus events out to WebSocket clients.

mod feed;

pub use feed::ChangeFeed;
