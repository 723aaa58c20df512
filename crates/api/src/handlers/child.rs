//! Handlers for the `/children` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use santaverse_core::error::CoreError;
use santaverse_core::types::DbId;
use santaverse_db::models::child::{Child, CreateChild, UpdateChild};
use santaverse_db::repositories::ChildRepo;
use santaverse_events::ChangeEvent;

use crate::error::{AppError, AppResult};
use crate::middleware::AuthUser;
use crate::state::AppState;

/// Table name used in change events.
const TABLE: &str = "children";

/// POST /api/v1/children
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateChild>,
) -> AppResult<(StatusCode, Json<Child>)> {
    let child = ChildRepo::create(&state.pool, user.user_id, &input).await?;
    state
        .change_bus
        .publish(ChangeEvent::insert(TABLE, child.id, user.user_id));
    Ok((StatusCode::CREATED, Json(child)))
}

/// GET /api/v1/children
pub async fn list(State(state): State<AppState>, user: AuthUser) -> AppResult<Json<Vec<Child>>> {
    let children = ChildRepo::list_by_owner(&state.pool, user.user_id).await?;
    Ok(Json(children))
}

/// GET /api/v1/children/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Child>> {
    let child = ChildRepo::find_by_id(&state.pool, user.user_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Child",
            id,
        }))?;
    Ok(Json(child))
}

/// PUT /api/v1/children/{id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateChild>,
) -> AppResult<Json<Child>> {
    let child = ChildRepo::update(&state.pool, user.user_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Child",
            id,
        }))?;
    state
        .change_bus
        .publish(ChangeEvent::update(TABLE, child.id, user.user_id));
    Ok(Json(child))
}

/// DELETE /api/v1/children/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ChildRepo::delete(&state.pool, user.user_id, id).await?;
    if deleted {
        state
            .change_bus
            .publish(ChangeEvent::delete(TABLE, id, user.user_id));
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Child",
            id,
        }))
    }
}
