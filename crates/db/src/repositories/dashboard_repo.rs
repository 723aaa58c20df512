//! Aggregate queries backing the dashboard summary endpoint.

use santaverse_core::types::DbId;
use sqlx::PgPool;

use crate::models::dashboard::DashboardSummary;

/// Row shape for the children status breakdown.
#[derive(sqlx::FromRow)]
struct ChildCounts {
    total: i64,
    nice: i64,
    naughty: i64,
    pending: i64,
}

/// Row shape for the gift aggregates.
#[derive(sqlx::FromRow)]
struct GiftCounts {
    total: i64,
    ready: i64,
    stock: i64,
}

/// Computes the per-owner aggregate snapshot.
pub struct DashboardRepo;

impl DashboardRepo {
    /// Build the owner's [`DashboardSummary`] from the entity tables.
    ///
    /// Each aggregate is a separate query; the snapshot is not
    /// transactional, matching the dashboard's refresh-on-change model.
    pub async fn summary(pool: &PgPool, owner_id: DbId) -> Result<DashboardSummary, sqlx::Error> {
        let children = sqlx::query_as::<_, ChildCounts>(
            "SELECT COUNT(*) AS total,
                    COUNT(*) FILTER (WHERE status = 'nice') AS nice,
                    COUNT(*) FILTER (WHERE status = 'naughty') AS naughty,
                    COUNT(*) FILTER (WHERE status = 'pending') AS pending
             FROM children WHERE owner_id = $1",
        )
        .bind(owner_id)
        .fetch_one(pool)
        .await?;

        let gifts = sqlx::query_as::<_, GiftCounts>(
            "SELECT COUNT(*) AS total,
                    COUNT(*) FILTER (WHERE status = 'ready') AS ready,
                    COALESCE(SUM(stock), 0)::BIGINT AS stock
             FROM gifts WHERE owner_id = $1",
        )
        .bind(owner_id)
        .fetch_one(pool)
        .await?;

        let (elves_total, elf_efficiency_avg) = sqlx::query_as::<_, (i64, Option<f64>)>(
            "SELECT COUNT(*), AVG(efficiency)::DOUBLE PRECISION
             FROM elves WHERE owner_id = $1",
        )
        .bind(owner_id)
        .fetch_one(pool)
        .await?;

        let tasks_open = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM tasks WHERE owner_id = $1 AND status <> 'done'",
        )
        .bind(owner_id)
        .fetch_one(pool)
        .await?;

        let (deliveries_total_gifts, deliveries_delivered) = sqlx::query_as::<_, (i64, i64)>(
            "SELECT COALESCE(SUM(total_gifts), 0)::BIGINT, COALESCE(SUM(delivered), 0)::BIGINT
             FROM deliveries WHERE owner_id = $1",
        )
        .bind(owner_id)
        .fetch_one(pool)
        .await?;

        Ok(DashboardSummary {
            children_total: children.total,
            children_nice: children.nice,
            children_naughty: children.naughty,
            children_pending: children.pending,
            gifts_total: gifts.total,
            gifts_ready: gifts.ready,
            gift_stock: gifts.stock,
            elves_total,
            elf_efficiency_avg,
            tasks_open,
            deliveries_total_gifts,
            deliveries_delivered,
        })
    }
}
