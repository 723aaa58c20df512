//! Task entity model and DTOs.

use chrono::NaiveDate;
use santaverse_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A task row from the `tasks` table.
///
/// `elf_id` is nullable: a task may be unassigned, and deleting an elf
/// clears the reference at the database level (`ON DELETE SET NULL`).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Task {
    pub id: DbId,
    pub owner_id: DbId,
    pub elf_id: Option<DbId>,
    pub title: String,
    pub category: String,
    /// One of `urgent` / `high` / `medium` / `low`.
    pub priority: String,
    /// One of `todo` / `in_progress` / `done`.
    pub status: String,
    pub deadline: Option<NaiveDate>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new task.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTask {
    pub title: String,
    pub category: String,
    pub elf_id: Option<DbId>,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub deadline: Option<NaiveDate>,
}

/// DTO for updating an existing task. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTask {
    pub title: Option<String>,
    pub category: Option<String>,
    pub elf_id: Option<DbId>,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub deadline: Option<NaiveDate>,
}
