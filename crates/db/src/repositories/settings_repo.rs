//! Repository for the `settings` table (one row per owner).

use santaverse_core::types::DbId;
use sqlx::PgPool;

use crate::models::settings::{SaveSettings, Settings};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, owner_id, countdown_target, created_at, updated_at";

/// Provides access to the per-owner settings row.
pub struct SettingsRepo;

impl SettingsRepo {
    /// Fetch the owner's settings row, if one has ever been saved.
    pub async fn find_by_owner(
        pool: &PgPool,
        owner_id: DbId,
    ) -> Result<Option<Settings>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM settings WHERE owner_id = $1");
        sqlx::query_as::<_, Settings>(&query)
            .bind(owner_id)
            .fetch_optional(pool)
            .await
    }

    /// Insert or update the owner's settings row, returning it.
    pub async fn upsert(
        pool: &PgPool,
        owner_id: DbId,
        input: &SaveSettings,
    ) -> Result<Settings, sqlx::Error> {
        let query = format!(
            "INSERT INTO settings (owner_id, countdown_target)
             VALUES ($1, $2)
             ON CONFLICT (owner_id)
             DO UPDATE SET countdown_target = EXCLUDED.countdown_target, updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Settings>(&query)
            .bind(owner_id)
            .bind(input.countdown_target)
            .fetch_one(pool)
            .await
    }
}
