//! Wishlist item entity model and DTOs.

use santaverse_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A wishlist item row from the `wishlist_items` table.
///
/// Always belongs to a child; removed automatically when its child is
/// deleted (FK cascade).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WishlistItem {
    pub id: DbId,
    pub owner_id: DbId,
    pub child_id: DbId,
    pub name: String,
    pub category: String,
    /// One of `high` / `medium` / `low`.
    pub priority: String,
    /// One of `pending` / `approved` / `rejected` / `modified`.
    pub status: String,
    pub age_appropriate: bool,
    pub in_stock: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a new wishlist item under a child.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateWishlistItem {
    pub name: String,
    pub category: String,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub age_appropriate: Option<bool>,
    pub in_stock: Option<bool>,
}

/// DTO for updating an existing wishlist item. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateWishlistItem {
    pub name: Option<String>,
    pub category: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub age_appropriate: Option<bool>,
    pub in_stock: Option<bool>,
}
