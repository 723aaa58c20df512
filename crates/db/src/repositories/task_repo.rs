//! Repository for the `tasks` table.

use santaverse_core::types::DbId;
use sqlx::PgPool;

use crate::models::task::{CreateTask, Task, UpdateTask};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, owner_id, elf_id, title, category, priority, status, \
                       deadline, created_at, updated_at";

/// Provides owner-scoped CRUD operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task for the given owner, returning the created row.
    pub async fn create(
        pool: &PgPool,
        owner_id: DbId,
        input: &CreateTask,
    ) -> Result<Task, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks (owner_id, elf_id, title, category, priority, status, deadline)
             VALUES ($1, $2, $3, $4, COALESCE($5, 'medium'), COALESCE($6, 'todo'), $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(owner_id)
            .bind(input.elf_id)
            .bind(&input.title)
            .bind(&input.category)
            .bind(&input.priority)
            .bind(&input.status)
            .bind(input.deadline)
            .fetch_one(pool)
            .await
    }

    /// Find a task by id within the owner's rows.
    pub async fn find_by_id(
        pool: &PgPool,
        owner_id: DbId,
        id: DbId,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = $1 AND owner_id = $2");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(owner_id)
            .fetch_optional(pool)
            .await
    }

    /// List all of the owner's tasks, newest first.
    pub async fn list_by_owner(pool: &PgPool, owner_id: DbId) -> Result<Vec<Task>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM tasks WHERE owner_id = $1 ORDER BY created_at DESC");
        sqlx::query_as::<_, Task>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// Update a task. Only non-`None` fields in `input` are applied.
    ///
    /// `elf_id` and `deadline` follow the same COALESCE rule as the other
    /// columns, so an assignment cannot be cleared here; deleting the elf
    /// clears it via the FK.
    ///
    /// Returns `None` if the owner has no row with the given `id`.
    pub async fn update(
        pool: &PgPool,
        owner_id: DbId,
        id: DbId,
        input: &UpdateTask,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET
                elf_id = COALESCE($3, elf_id),
                title = COALESCE($4, title),
                category = COALESCE($5, category),
                priority = COALESCE($6, priority),
                status = COALESCE($7, status),
                deadline = COALESCE($8, deadline),
                updated_at = NOW()
             WHERE id = $1 AND owner_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(owner_id)
            .bind(input.elf_id)
            .bind(&input.title)
            .bind(&input.category)
            .bind(&input.priority)
            .bind(&input.status)
            .bind(input.deadline)
            .fetch_optional(pool)
            .await
    }

    /// Delete a task by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, owner_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
