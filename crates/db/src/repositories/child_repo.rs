//! Repository for the `children` table.

use santaverse_core::types::DbId;
use sqlx::PgPool;

use crate::models::child::{Child, CreateChild, UpdateChild};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, owner_id, name, age, country, region, behavior_score, status, created_at, updated_at";

/// Provides owner-scoped CRUD operations for children.
pub struct ChildRepo;

impl ChildRepo {
    /// Insert a new child for the given owner, returning the created row.
    ///
    /// If `behavior_score` is `None`, defaults to 50.
    /// If `status` is `None`, defaults to `pending`.
    pub async fn create(
        pool: &PgPool,
        owner_id: DbId,
        input: &CreateChild,
    ) -> Result<Child, sqlx::Error> {
        let query = format!(
            "INSERT INTO children (owner_id, name, age, country, region, behavior_score, status)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, 50), COALESCE($7, 'pending'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Child>(&query)
            .bind(owner_id)
            .bind(&input.name)
            .bind(input.age)
            .bind(&input.country)
            .bind(&input.region)
            .bind(input.behavior_score)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    /// Find a child by id within the owner's rows.
    pub async fn find_by_id(
        pool: &PgPool,
        owner_id: DbId,
        id: DbId,
    ) -> Result<Option<Child>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM children WHERE id = $1 AND owner_id = $2");
        sqlx::query_as::<_, Child>(&query)
            .bind(id)
            .bind(owner_id)
            .fetch_optional(pool)
            .await
    }

    /// List all of the owner's children, newest first.
    pub async fn list_by_owner(pool: &PgPool, owner_id: DbId) -> Result<Vec<Child>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM children WHERE owner_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Child>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// Update a child. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if the owner has no row with the given `id`.
    pub async fn update(
        pool: &PgPool,
        owner_id: DbId,
        id: DbId,
        input: &UpdateChild,
    ) -> Result<Option<Child>, sqlx::Error> {
        let query = format!(
            "UPDATE children SET
                name = COALESCE($3, name),
                age = COALESCE($4, age),
                country = COALESCE($5, country),
                region = COALESCE($6, region),
                behavior_score = COALESCE($7, behavior_score),
                status = COALESCE($8, status),
                updated_at = NOW()
             WHERE id = $1 AND owner_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Child>(&query)
            .bind(id)
            .bind(owner_id)
            .bind(&input.name)
            .bind(input.age)
            .bind(&input.country)
            .bind(&input.region)
            .bind(input.behavior_score)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    /// Delete a child by id. Returns `true` if a row was removed.
    ///
    /// Wishlist items under the child go with it (FK cascade).
    pub async fn delete(pool: &PgPool, owner_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM children WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Whether the owner has any children rows at all. Used by demo seeding.
    pub async fn any_exist(pool: &PgPool, owner_id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM children WHERE owner_id = $1)")
            .bind(owner_id)
            .fetch_one(pool)
            .await
    }
}
