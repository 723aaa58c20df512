//! Repository for the `wishlist_items` table.

use santaverse_core::types::DbId;
use sqlx::PgPool;

use crate::models::wishlist_item::{CreateWishlistItem, UpdateWishlistItem, WishlistItem};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, owner_id, child_id, name, category, priority, status, \
                       age_appropriate, in_stock, created_at";

/// Provides owner-scoped CRUD operations for wishlist items.
pub struct WishlistItemRepo;

impl WishlistItemRepo {
    /// Insert a new wishlist item under a child, returning the created row.
    pub async fn create(
        pool: &PgPool,
        owner_id: DbId,
        child_id: DbId,
        input: &CreateWishlistItem,
    ) -> Result<WishlistItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO wishlist_items
                (owner_id, child_id, name, category, priority, status, age_appropriate, in_stock)
             VALUES ($1, $2, $3, $4, COALESCE($5, 'medium'), COALESCE($6, 'pending'),
                     COALESCE($7, TRUE), COALESCE($8, FALSE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WishlistItem>(&query)
            .bind(owner_id)
            .bind(child_id)
            .bind(&input.name)
            .bind(&input.category)
            .bind(&input.priority)
            .bind(&input.status)
            .bind(input.age_appropriate)
            .bind(input.in_stock)
            .fetch_one(pool)
            .await
    }

    /// Find a wishlist item by id within the owner's rows.
    pub async fn find_by_id(
        pool: &PgPool,
        owner_id: DbId,
        id: DbId,
    ) -> Result<Option<WishlistItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM wishlist_items WHERE id = $1 AND owner_id = $2");
        sqlx::query_as::<_, WishlistItem>(&query)
            .bind(id)
            .bind(owner_id)
            .fetch_optional(pool)
            .await
    }

    /// List all items on one child's wishlist, oldest first.
    pub async fn list_by_child(
        pool: &PgPool,
        owner_id: DbId,
        child_id: DbId,
    ) -> Result<Vec<WishlistItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM wishlist_items
             WHERE child_id = $1 AND owner_id = $2
             ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, WishlistItem>(&query)
            .bind(child_id)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// Update a wishlist item. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if the owner has no row with the given `id`.
    pub async fn update(
        pool: &PgPool,
        owner_id: DbId,
        id: DbId,
        input: &UpdateWishlistItem,
    ) -> Result<Option<WishlistItem>, sqlx::Error> {
        let query = format!(
            "UPDATE wishlist_items SET
                name = COALESCE($3, name),
                category = COALESCE($4, category),
                priority = COALESCE($5, priority),
                status = COALESCE($6, status),
                age_appropriate = COALESCE($7, age_appropriate),
                in_stock = COALESCE($8, in_stock)
             WHERE id = $1 AND owner_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WishlistItem>(&query)
            .bind(id)
            .bind(owner_id)
            .bind(&input.name)
            .bind(&input.category)
            .bind(&input.priority)
            .bind(&input.status)
            .bind(input.age_appropriate)
            .bind(input.in_stock)
            .fetch_optional(pool)
            .await
    }

    /// Delete a wishlist item by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, owner_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM wishlist_items WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
