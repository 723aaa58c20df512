//! Handlers for the per-owner `/settings` resource.

use axum::extract::State;
use axum::Json;
use santaverse_core::error::CoreError;
use santaverse_db::models::settings::{SaveSettings, Settings};
use santaverse_db::repositories::SettingsRepo;
use santaverse_events::ChangeEvent;

use crate::error::{AppError, AppResult};
use crate::middleware::AuthUser;
use crate::state::AppState;

/// Table name used in change events.
const TABLE: &str = "settings";

/// GET /api/v1/settings
///
/// 404 until the owner saves settings for the first time.
pub async fn get(State(state): State<AppState>, user: AuthUser) -> AppResult<Json<Settings>> {
    let settings = SettingsRepo::find_by_owner(&state.pool, user.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Settings",
            id: user.user_id,
        }))?;
    Ok(Json(settings))
}

/// PUT /api/v1/settings
///
/// Inserts the owner's settings row on first save, updates it afterwards.
pub async fn save(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<SaveSettings>,
) -> AppResult<Json<Settings>> {
    let settings = SettingsRepo::upsert(&state.pool, user.user_id, &input).await?;
    state
        .change_bus
        .publish(ChangeEvent::update(TABLE, settings.id, user.user_id));
    Ok(Json(settings))
}
