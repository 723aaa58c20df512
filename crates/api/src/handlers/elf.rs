//! Handlers for the `/elves` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use santaverse_core::error::CoreError;
use santaverse_core::types::DbId;
use santaverse_db::models::elf::{CreateElf, Elf, UpdateElf};
use santaverse_db::repositories::ElfRepo;
use santaverse_events::ChangeEvent;

use crate::error::{AppError, AppResult};
use crate::middleware::AuthUser;
use crate::state::AppState;

/// Table name used in change events.
const TABLE: &str = "elves";

/// POST /api/v1/elves
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateElf>,
) -> AppResult<(StatusCode, Json<Elf>)> {
    let elf = ElfRepo::create(&state.pool, user.user_id, &input).await?;
    state
        .change_bus
        .publish(ChangeEvent::insert(TABLE, elf.id, user.user_id));
    Ok((StatusCode::CREATED, Json(elf)))
}

/// GET /api/v1/elves
pub async fn list(State(state): State<AppState>, user: AuthUser) -> AppResult<Json<Vec<Elf>>> {
    let elves = ElfRepo::list_by_owner(&state.pool, user.user_id).await?;
    Ok(Json(elves))
}

/// GET /api/v1/elves/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Elf>> {
    let elf = ElfRepo::find_by_id(&state.pool, user.user_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Elf", id }))?;
    Ok(Json(elf))
}

/// PUT /api/v1/elves/{id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateElf>,
) -> AppResult<Json<Elf>> {
    let elf = ElfRepo::update(&state.pool, user.user_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Elf", id }))?;
    state
        .change_bus
        .publish(ChangeEvent::update(TABLE, elf.id, user.user_id));
    Ok(Json(elf))
}

/// DELETE /api/v1/elves/{id}
///
/// Tasks assigned to the elf stay behind, unassigned (`ON DELETE SET NULL`).
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ElfRepo::delete(&state.pool, user.user_id, id).await?;
    if deleted {
        state
            .change_bus
            .publish(ChangeEvent::delete(TABLE, id, user.user_id));
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Elf", id }))
    }
}
