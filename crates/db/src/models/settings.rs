//! Per-owner settings model and DTO.

use santaverse_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The single settings row for an owner (`UNIQUE(owner_id)`).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Settings {
    pub id: DbId,
    pub owner_id: DbId,
    /// The moment the dashboard counts down to.
    pub countdown_target: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for saving settings. Used by the upsert; there is no partial patch
/// because the row has a single meaningful field.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveSettings {
    pub countdown_target: Timestamp,
}
