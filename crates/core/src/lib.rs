//! Shared domain foundation for the SantaVerse platform.
//!
//! Contains the primitive type aliases, the domain error type, well-known
//! role and status constants, and the static demo dataset used to seed an
//! empty workspace.

pub mod demo;
pub mod error;
pub mod roles;
pub mod statuses;
pub mod types;
