//! Repository for the `elves` table.

use santaverse_core::types::DbId;
use sqlx::PgPool;

use crate::models::elf::{CreateElf, Elf, UpdateElf};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, owner_id, name, skill, energy_level, tasks_completed, \
                       current_task, morale, efficiency, created_at, updated_at";

/// Provides owner-scoped CRUD operations for elves.
pub struct ElfRepo;

impl ElfRepo {
    /// Insert a new elf for the given owner, returning the created row.
    pub async fn create(
        pool: &PgPool,
        owner_id: DbId,
        input: &CreateElf,
    ) -> Result<Elf, sqlx::Error> {
        let query = format!(
            "INSERT INTO elves
                (owner_id, name, skill, energy_level, tasks_completed, current_task, morale, efficiency)
             VALUES ($1, $2, $3, COALESCE($4, 100), COALESCE($5, 0), $6,
                     COALESCE($7, 'good'), COALESCE($8, 80))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Elf>(&query)
            .bind(owner_id)
            .bind(&input.name)
            .bind(&input.skill)
            .bind(input.energy_level)
            .bind(input.tasks_completed)
            .bind(&input.current_task)
            .bind(&input.morale)
            .bind(input.efficiency)
            .fetch_one(pool)
            .await
    }

    /// Find an elf by id within the owner's rows.
    pub async fn find_by_id(
        pool: &PgPool,
        owner_id: DbId,
        id: DbId,
    ) -> Result<Option<Elf>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM elves WHERE id = $1 AND owner_id = $2");
        sqlx::query_as::<_, Elf>(&query)
            .bind(id)
            .bind(owner_id)
            .fetch_optional(pool)
            .await
    }

    /// List all of the owner's elves, newest first.
    pub async fn list_by_owner(pool: &PgPool, owner_id: DbId) -> Result<Vec<Elf>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM elves WHERE owner_id = $1 ORDER BY created_at DESC");
        sqlx::query_as::<_, Elf>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// Update an elf. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if the owner has no row with the given `id`.
    pub async fn update(
        pool: &PgPool,
        owner_id: DbId,
        id: DbId,
        input: &UpdateElf,
    ) -> Result<Option<Elf>, sqlx::Error> {
        let query = format!(
            "UPDATE elves SET
                name = COALESCE($3, name),
                skill = COALESCE($4, skill),
                energy_level = COALESCE($5, energy_level),
                tasks_completed = COALESCE($6, tasks_completed),
                current_task = COALESCE($7, current_task),
                morale = COALESCE($8, morale),
                efficiency = COALESCE($9, efficiency),
                updated_at = NOW()
             WHERE id = $1 AND owner_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Elf>(&query)
            .bind(id)
            .bind(owner_id)
            .bind(&input.name)
            .bind(&input.skill)
            .bind(input.energy_level)
            .bind(input.tasks_completed)
            .bind(&input.current_task)
            .bind(&input.morale)
            .bind(input.efficiency)
            .fetch_optional(pool)
            .await
    }

    /// Delete an elf by id. Returns `true` if a row was removed.
    ///
    /// Tasks assigned to the elf become unassigned (`ON DELETE SET NULL`).
    pub async fn delete(pool: &PgPool, owner_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM elves WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
