//! Route definitions for per-owner settings.

use axum::routing::get;
use axum::Router;

use crate::handlers::settings;
use crate::state::AppState;

/// Routes mounted at `/settings`.
///
/// ```text
/// GET /settings  -> get
/// PUT /settings  -> save (upsert)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/settings", get(settings::get).put(settings::save))
}
