//! Route definitions for demo-mode seeding.

use axum::routing::post;
use axum::Router;

use crate::handlers::demo;
use crate::state::AppState;

/// Routes mounted at `/demo`.
///
/// ```text
/// POST /demo/seed  -> seed
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/demo/seed", post(demo::seed))
}
