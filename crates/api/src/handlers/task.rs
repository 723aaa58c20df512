//! Handlers for the `/tasks` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use santaverse_core::error::CoreError;
use santaverse_core::types::DbId;
use santaverse_db::models::task::{CreateTask, Task, UpdateTask};
use santaverse_db::repositories::{ElfRepo, TaskRepo};
use santaverse_events::ChangeEvent;

use crate::error::{AppError, AppResult};
use crate::middleware::AuthUser;
use crate::state::AppState;

/// Table name used in change events.
const TABLE: &str = "tasks";

/// Return 404 unless the referenced elf exists within the owner's rows.
///
/// Without this check a cross-owner `elf_id` would surface as an opaque
/// FK violation instead of a not-found.
async fn ensure_elf(state: &AppState, owner_id: DbId, elf_id: DbId) -> AppResult<()> {
    ElfRepo::find_by_id(&state.pool, owner_id, elf_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Elf",
            id: elf_id,
        }))?;
    Ok(())
}

/// POST /api/v1/tasks
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateTask>,
) -> AppResult<(StatusCode, Json<Task>)> {
    if let Some(elf_id) = input.elf_id {
        ensure_elf(&state, user.user_id, elf_id).await?;
    }
    let task = TaskRepo::create(&state.pool, user.user_id, &input).await?;
    state
        .change_bus
        .publish(ChangeEvent::insert(TABLE, task.id, user.user_id));
    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /api/v1/tasks
pub async fn list(State(state): State<AppState>, user: AuthUser) -> AppResult<Json<Vec<Task>>> {
    let tasks = TaskRepo::list_by_owner(&state.pool, user.user_id).await?;
    Ok(Json(tasks))
}

/// GET /api/v1/tasks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Task>> {
    let task = TaskRepo::find_by_id(&state.pool, user.user_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Task", id }))?;
    Ok(Json(task))
}

/// PUT /api/v1/tasks/{id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTask>,
) -> AppResult<Json<Task>> {
    if let Some(elf_id) = input.elf_id {
        ensure_elf(&state, user.user_id, elf_id).await?;
    }
    let task = TaskRepo::update(&state.pool, user.user_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Task", id }))?;
    state
        .change_bus
        .publish(ChangeEvent::update(TABLE, task.id, user.user_id));
    Ok(Json(task))
}

/// DELETE /api/v1/tasks/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = TaskRepo::delete(&state.pool, user.user_id, id).await?;
    if deleted {
        state
            .change_bus
            .publish(ChangeEvent::delete(TABLE, id, user.user_id));
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Task", id }))
    }
}
