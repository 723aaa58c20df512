//! Liveness endpoint, mounted at the root rather than under `/api/v1`.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /healthz
///
/// Reports `ok` with a reachable database, `degraded` without one. Always
/// answers 200; the body carries the detail.
async fn healthz(State(state): State<AppState>) -> Json<Value> {
    let db_up = santaverse_db::health_check(&state.pool).await.is_ok();

    Json(json!({
        "status": if db_up { "ok" } else { "degraded" },
        "db": if db_up { "up" } else { "down" },
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/healthz", get(healthz))
}
