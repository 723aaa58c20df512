//! Elf workforce entity model and DTOs.

use santaverse_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An elf row from the `elves` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Elf {
    pub id: DbId,
    pub owner_id: DbId,
    pub name: String,
    /// One of `toymaker` / `wrapper` / `quality` / `logistics` / `tech`.
    pub skill: String,
    pub energy_level: i32,
    pub tasks_completed: i32,
    pub current_task: Option<String>,
    /// One of `excellent` / `good` / `tired` / `exhausted`.
    pub morale: String,
    pub efficiency: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new elf.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateElf {
    pub name: String,
    pub skill: String,
    pub energy_level: Option<i32>,
    pub tasks_completed: Option<i32>,
    pub current_task: Option<String>,
    pub morale: Option<String>,
    pub efficiency: Option<i32>,
}

/// DTO for updating an existing elf. All fields are optional.
///
/// `current_task` cannot be cleared through this DTO (COALESCE update);
/// send an empty string to mark an idle elf.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateElf {
    pub name: Option<String>,
    pub skill: Option<String>,
    pub energy_level: Option<i32>,
    pub tasks_completed: Option<i32>,
    pub current_task: Option<String>,
    pub morale: Option<String>,
    pub efficiency: Option<i32>,
}
