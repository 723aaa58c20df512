//! Handler for the dashboard summary endpoint.

use axum::extract::State;
use axum::Json;
use santaverse_db::models::dashboard::DashboardSummary;
use santaverse_db::repositories::DashboardRepo;

use crate::error::AppResult;
use crate::middleware::AuthUser;
use crate::state::AppState;

/// GET /api/v1/dashboard/summary
///
/// One round of aggregate counters for the stat tiles. The dashboard
/// refetches this whenever any entity table changes.
pub async fn summary(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<DashboardSummary>> {
    let summary = DashboardRepo::summary(&state.pool, user.user_id).await?;
    Ok(Json(summary))
}
