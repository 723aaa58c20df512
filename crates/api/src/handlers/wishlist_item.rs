//! Handlers for wishlist items.
//!
//! Listing and creation are nested under a child
//! (`/children/{child_id}/wishlist`); updates and deletes address items
//! directly (`/wishlist-items/{id}`).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use santaverse_core::error::CoreError;
use santaverse_core::types::DbId;
use santaverse_db::models::wishlist_item::{CreateWishlistItem, UpdateWishlistItem, WishlistItem};
use santaverse_db::repositories::{ChildRepo, WishlistItemRepo};
use santaverse_events::ChangeEvent;

use crate::error::{AppError, AppResult};
use crate::middleware::AuthUser;
use crate::state::AppState;

/// Table name used in change events.
const TABLE: &str = "wishlist_items";

/// Return 404 unless the child exists within the owner's rows.
async fn ensure_child(state: &AppState, owner_id: DbId, child_id: DbId) -> AppResult<()> {
    ChildRepo::find_by_id(&state.pool, owner_id, child_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Child",
            id: child_id,
        }))?;
    Ok(())
}

/// GET /api/v1/children/{child_id}/wishlist
pub async fn list_by_child(
    State(state): State<AppState>,
    user: AuthUser,
    Path(child_id): Path<DbId>,
) -> AppResult<Json<Vec<WishlistItem>>> {
    ensure_child(&state, user.user_id, child_id).await?;
    let items = WishlistItemRepo::list_by_child(&state.pool, user.user_id, child_id).await?;
    Ok(Json(items))
}

/// POST /api/v1/children/{child_id}/wishlist
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Path(child_id): Path<DbId>,
    Json(input): Json<CreateWishlistItem>,
) -> AppResult<(StatusCode, Json<WishlistItem>)> {
    ensure_child(&state, user.user_id, child_id).await?;
    let item = WishlistItemRepo::create(&state.pool, user.user_id, child_id, &input).await?;
    state
        .change_bus
        .publish(ChangeEvent::insert(TABLE, item.id, user.user_id));
    Ok((StatusCode::CREATED, Json(item)))
}

/// PUT /api/v1/wishlist-items/{id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateWishlistItem>,
) -> AppResult<Json<WishlistItem>> {
    let item = WishlistItemRepo::update(&state.pool, user.user_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "WishlistItem",
            id,
        }))?;
    state
        .change_bus
        .publish(ChangeEvent::update(TABLE, item.id, user.user_id));
    Ok(Json(item))
}

/// DELETE /api/v1/wishlist-items/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = WishlistItemRepo::delete(&state.pool, user.user_id, id).await?;
    if deleted {
        state
            .change_bus
            .publish(ChangeEvent::delete(TABLE, id, user.user_id));
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "WishlistItem",
            id,
        }))
    }
}
