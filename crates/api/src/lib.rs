//! SantaVerse HTTP/WebSocket API server library.
//!
//! The binary in `main.rs` wires configuration, the database pool, the
//! change bus, and the WebSocket manager into [`router::build_app_router`];
//! integration tests build the identical router through the same function.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod realtime;
pub mod router;
pub mod routes;
pub mod state;
pub mod ws;
