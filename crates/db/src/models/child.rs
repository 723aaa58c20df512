//! Child entity model and DTOs.

use santaverse_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A child row from the `children` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Child {
    pub id: DbId,
    pub owner_id: DbId,
    pub name: String,
    pub age: i32,
    pub country: String,
    pub region: String,
    pub behavior_score: i32,
    /// One of `nice` / `naughty` / `pending`.
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new child.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateChild {
    pub name: String,
    pub age: i32,
    pub country: String,
    pub region: String,
    /// Defaults to 50 if omitted.
    pub behavior_score: Option<i32>,
    /// Defaults to `pending` if omitted.
    pub status: Option<String>,
}

/// DTO for updating an existing child. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateChild {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub country: Option<String>,
    pub region: Option<String>,
    pub behavior_score: Option<i32>,
    pub status: Option<String>,
}
