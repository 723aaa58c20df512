//! AI recommendation gateway client.
//!
//! Wraps a chat-completions HTTP gateway behind a typed interface: build
//! a festive prompt for one of the three recommendation kinds, submit it,
//! and parse the model's reply back into structured recommendations.
//! Rate-limit (429) and credit-exhaustion (402) responses surface as
//! distinct errors so the dashboard can show its special-cased messages.

pub mod client;
pub mod parse;
pub mod prompts;

pub use client::{GatewayConfig, GatewayError, RecommendationGateway};
pub use parse::Recommendation;
pub use prompts::RecommendationKind;
