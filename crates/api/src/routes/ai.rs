//! Route definitions for AI recommendations.

use axum::routing::post;
use axum::Router;

use crate::handlers::ai;
use crate::state::AppState;

/// Routes mounted at `/ai`.
///
/// ```text
/// POST /ai/recommendations  -> recommendations
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/ai/recommendations", post(ai::recommendations))
}
