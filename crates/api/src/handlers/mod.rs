//! HTTP handlers, one module per resource.
//!
//! Every entity handler authenticates via [`AuthUser`](crate::middleware::AuthUser)
//! and, after a successful mutation, publishes a
//! [`ChangeEvent`](santaverse_events::ChangeEvent) so connected dashboards
//! can invalidate the affected table's cache.

pub mod admin;
pub mod ai;
pub mod auth;
pub mod child;
pub mod dashboard;
pub mod delivery;
pub mod demo;
pub mod elf;
pub mod gift;
pub mod settings;
pub mod task;
pub mod wishlist_item;
