//! Repository for the `deliveries` table.

use santaverse_core::types::DbId;
use sqlx::PgPool;

use crate::models::delivery::{CreateDelivery, Delivery, UpdateDelivery};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, owner_id, region, country, total_gifts, delivered, status, \
                       weather_risk, timezone, created_at, updated_at";

/// Provides owner-scoped CRUD operations for deliveries.
pub struct DeliveryRepo;

impl DeliveryRepo {
    /// Insert a new delivery for the given owner, returning the created row.
    pub async fn create(
        pool: &PgPool,
        owner_id: DbId,
        input: &CreateDelivery,
    ) -> Result<Delivery, sqlx::Error> {
        let query = format!(
            "INSERT INTO deliveries
                (owner_id, region, country, total_gifts, delivered, status, weather_risk, timezone)
             VALUES ($1, $2, COALESCE($3, 'Multiple'), COALESCE($4, 0), COALESCE($5, 0),
                     COALESCE($6, 'pending'), COALESCE($7, 'low'), COALESCE($8, 'UTC'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Delivery>(&query)
            .bind(owner_id)
            .bind(&input.region)
            .bind(&input.country)
            .bind(input.total_gifts)
            .bind(input.delivered)
            .bind(&input.status)
            .bind(&input.weather_risk)
            .bind(&input.timezone)
            .fetch_one(pool)
            .await
    }

    /// Find a delivery by id within the owner's rows.
    pub async fn find_by_id(
        pool: &PgPool,
        owner_id: DbId,
        id: DbId,
    ) -> Result<Option<Delivery>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM deliveries WHERE id = $1 AND owner_id = $2");
        sqlx::query_as::<_, Delivery>(&query)
            .bind(id)
            .bind(owner_id)
            .fetch_optional(pool)
            .await
    }

    /// List all of the owner's deliveries, by region name.
    pub async fn list_by_owner(
        pool: &PgPool,
        owner_id: DbId,
    ) -> Result<Vec<Delivery>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM deliveries WHERE owner_id = $1 ORDER BY region ASC");
        sqlx::query_as::<_, Delivery>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// Update a delivery. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if the owner has no row with the given `id`.
    pub async fn update(
        pool: &PgPool,
        owner_id: DbId,
        id: DbId,
        input: &UpdateDelivery,
    ) -> Result<Option<Delivery>, sqlx::Error> {
        let query = format!(
            "UPDATE deliveries SET
                region = COALESCE($3, region),
                country = COALESCE($4, country),
                total_gifts = COALESCE($5, total_gifts),
                delivered = COALESCE($6, delivered),
                status = COALESCE($7, status),
                weather_risk = COALESCE($8, weather_risk),
                timezone = COALESCE($9, timezone),
                updated_at = NOW()
             WHERE id = $1 AND owner_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Delivery>(&query)
            .bind(id)
            .bind(owner_id)
            .bind(&input.region)
            .bind(&input.country)
            .bind(input.total_gifts)
            .bind(input.delivered)
            .bind(&input.status)
            .bind(&input.weather_risk)
            .bind(&input.timezone)
            .fetch_optional(pool)
            .await
    }

    /// Delete a delivery by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, owner_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM deliveries WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
