//! Handlers for the `/deliveries` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use santaverse_core::error::CoreError;
use santaverse_core::types::DbId;
use santaverse_db::models::delivery::{CreateDelivery, Delivery, UpdateDelivery};
use santaverse_db::repositories::DeliveryRepo;
use santaverse_events::ChangeEvent;

use crate::error::{AppError, AppResult};
use crate::middleware::AuthUser;
use crate::state::AppState;

/// Table name used in change events.
const TABLE: &str = "deliveries";

/// POST /api/v1/deliveries
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateDelivery>,
) -> AppResult<(StatusCode, Json<Delivery>)> {
    let delivery = DeliveryRepo::create(&state.pool, user.user_id, &input).await?;
    state
        .change_bus
        .publish(ChangeEvent::insert(TABLE, delivery.id, user.user_id));
    Ok((StatusCode::CREATED, Json(delivery)))
}

/// GET /api/v1/deliveries
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<Vec<Delivery>>> {
    let deliveries = DeliveryRepo::list_by_owner(&state.pool, user.user_id).await?;
    Ok(Json(deliveries))
}

/// GET /api/v1/deliveries/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Delivery>> {
    let delivery = DeliveryRepo::find_by_id(&state.pool, user.user_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Delivery",
            id,
        }))?;
    Ok(Json(delivery))
}

/// PUT /api/v1/deliveries/{id}
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateDelivery>,
) -> AppResult<Json<Delivery>> {
    let delivery = DeliveryRepo::update(&state.pool, user.user_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Delivery",
            id,
        }))?;
    state
        .change_bus
        .publish(ChangeEvent::update(TABLE, delivery.id, user.user_id));
    Ok(Json(delivery))
}

/// DELETE /api/v1/deliveries/{id}
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = DeliveryRepo::delete(&state.pool, user.user_id, id).await?;
    if deleted {
        state
            .change_bus
            .publish(ChangeEvent::delete(TABLE, id, user.user_id));
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Delivery",
            id,
        }))
    }
}
