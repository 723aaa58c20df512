//! Delivery entity model and DTOs.

use santaverse_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A delivery row from the `deliveries` table. One row per region.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Delivery {
    pub id: DbId,
    pub owner_id: DbId,
    pub region: String,
    pub country: String,
    pub total_gifts: i32,
    pub delivered: i32,
    /// One of `pending` / `in_transit` / `completed`.
    pub status: String,
    /// One of `low` / `medium` / `high`.
    pub weather_risk: String,
    /// UTC offset label, e.g. `UTC+8`.
    pub timezone: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new delivery.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDelivery {
    pub region: String,
    pub country: Option<String>,
    pub total_gifts: Option<i32>,
    pub delivered: Option<i32>,
    pub status: Option<String>,
    pub weather_risk: Option<String>,
    pub timezone: Option<String>,
}

/// DTO for updating an existing delivery. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateDelivery {
    pub region: Option<String>,
    pub country: Option<String>,
    pub total_gifts: Option<i32>,
    pub delivered: Option<i32>,
    pub status: Option<String>,
    pub weather_risk: Option<String>,
    pub timezone: Option<String>,
}
