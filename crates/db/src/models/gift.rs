//! Gift inventory entity model and DTOs.

use santaverse_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A gift row from the `gifts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Gift {
    pub id: DbId,
    pub owner_id: DbId,
    pub name: String,
    pub category: String,
    pub stock: i32,
    pub max_stock: i32,
    /// One of `manufacturing` / `ready` / `packed`.
    pub status: String,
    /// One of `high` / `medium` / `low`.
    pub demand_level: String,
    /// 0–100 by convention; the data layer stores whatever it is given.
    pub production_progress: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new gift.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGift {
    pub name: String,
    pub category: String,
    pub stock: Option<i32>,
    pub max_stock: Option<i32>,
    pub status: Option<String>,
    pub demand_level: Option<String>,
    pub production_progress: Option<i32>,
}

/// DTO for updating an existing gift. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateGift {
    pub name: Option<String>,
    pub category: Option<String>,
    pub stock: Option<i32>,
    pub max_stock: Option<i32>,
    pub status: Option<String>,
    pub demand_level: Option<String>,
    pub production_progress: Option<i32>,
}
