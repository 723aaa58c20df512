//! Handlers for the `/gifts` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use santaverse_core::error::CoreError;
use santaverse_core::types::DbId;
use santaverse_db::models::gift::{CreateGift, Gift, UpdateGift};
use santaverse_db::repositories::GiftRepo;
use santaverse_events::ChangeEvent;

use crate::error::{AppError, AppResult};
use crate::middleware::AuthUser;
use crate::state::AppState;

/// Table name used in change events.
const TABLE: &str = "gifts";

/// POST /api/v1/gifts
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateGift>,
) -> AppResult<(StatusCode, Json<Gift>)> {
    let gift = GiftRepo::create(&state.pool, user.user_id, &input).await?;
    state
        .change_bus
        .publish(ChangeEvent::insert(TABLE, gift.id, user.user_id));
    Ok((StatusCode::CREATED, Json(gift)))
}

/// GET /api/v1/gifts
pub async fn list(State(state): State<AppState>, user: AuthUser) -> AppResult<Json<Vec<Gift>>> {
    let gifts = GiftRepo::list_by_owner(&state.pool, user.user_id).await?;
    Ok(Json(gifts))
}

/// GET /api/v1/gifts/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Gift>> {
    let gift = GiftRepo::find_by_id(&state.pool, user.user_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Gift", id }))?;
    Ok(Json(gift))
}

/// PUT /api/v1/gifts/{id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateGift>,
) -> AppResult<Json<Gift>> {
    let gift = GiftRepo::update(&state.pool, user.user_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Gift", id }))?;
    state
        .change_bus
        .publish(ChangeEvent::update(TABLE, gift.id, user.user_id));
    Ok(Json(gift))
}

/// DELETE /api/v1/gifts/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = GiftRepo::delete(&state.pool, user.user_id, id).await?;
    if deleted {
        state
            .change_bus
            .publish(ChangeEvent::delete(TABLE, id, user.user_id));
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Gift", id }))
    }
}
