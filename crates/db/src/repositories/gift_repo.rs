//! Repository for the `gifts` table.

use santaverse_core::types::DbId;
use sqlx::PgPool;

use crate::models::gift::{CreateGift, Gift, UpdateGift};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, owner_id, name, category, stock, max_stock, status, \
                       demand_level, production_progress, created_at, updated_at";

/// Provides owner-scoped CRUD operations for gifts.
pub struct GiftRepo;

impl GiftRepo {
    /// Insert a new gift for the given owner, returning the created row.
    pub async fn create(
        pool: &PgPool,
        owner_id: DbId,
        input: &CreateGift,
    ) -> Result<Gift, sqlx::Error> {
        let query = format!(
            "INSERT INTO gifts
                (owner_id, name, category, stock, max_stock, status, demand_level, production_progress)
             VALUES ($1, $2, $3, COALESCE($4, 0), COALESCE($5, 100000),
                     COALESCE($6, 'manufacturing'), COALESCE($7, 'medium'), COALESCE($8, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Gift>(&query)
            .bind(owner_id)
            .bind(&input.name)
            .bind(&input.category)
            .bind(input.stock)
            .bind(input.max_stock)
            .bind(&input.status)
            .bind(&input.demand_level)
            .bind(input.production_progress)
            .fetch_one(pool)
            .await
    }

    /// Find a gift by id within the owner's rows.
    pub async fn find_by_id(
        pool: &PgPool,
        owner_id: DbId,
        id: DbId,
    ) -> Result<Option<Gift>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM gifts WHERE id = $1 AND owner_id = $2");
        sqlx::query_as::<_, Gift>(&query)
            .bind(id)
            .bind(owner_id)
            .fetch_optional(pool)
            .await
    }

    /// List all of the owner's gifts, newest first.
    pub async fn list_by_owner(pool: &PgPool, owner_id: DbId) -> Result<Vec<Gift>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM gifts WHERE owner_id = $1 ORDER BY created_at DESC");
        sqlx::query_as::<_, Gift>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// Update a gift. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if the owner has no row with the given `id`.
    pub async fn update(
        pool: &PgPool,
        owner_id: DbId,
        id: DbId,
        input: &UpdateGift,
    ) -> Result<Option<Gift>, sqlx::Error> {
        let query = format!(
            "UPDATE gifts SET
                name = COALESCE($3, name),
                category = COALESCE($4, category),
                stock = COALESCE($5, stock),
                max_stock = COALESCE($6, max_stock),
                status = COALESCE($7, status),
                demand_level = COALESCE($8, demand_level),
                production_progress = COALESCE($9, production_progress),
                updated_at = NOW()
             WHERE id = $1 AND owner_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Gift>(&query)
            .bind(id)
            .bind(owner_id)
            .bind(&input.name)
            .bind(&input.category)
            .bind(input.stock)
            .bind(input.max_stock)
            .bind(&input.status)
            .bind(&input.demand_level)
            .bind(input.production_progress)
            .fetch_optional(pool)
            .await
    }

    /// Delete a gift by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, owner_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM gifts WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
