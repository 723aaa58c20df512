//! Route definitions for children and their wishlists.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::{child, wishlist_item};
use crate::state::AppState;

/// Routes mounted at `/children` and `/wishlist-items`.
///
/// ```text
/// GET    /children                       -> list
/// POST   /children                       -> create
/// GET    /children/{id}                  -> get_by_id
/// PUT    /children/{id}                  -> update
/// DELETE /children/{id}                  -> delete
///
/// GET    /children/{child_id}/wishlist   -> list_by_child
/// POST   /children/{child_id}/wishlist   -> create
///
/// PUT    /wishlist-items/{id}            -> update
/// DELETE /wishlist-items/{id}            -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/children", get(child::list).post(child::create))
        .route(
            "/children/{id}",
            get(child::get_by_id)
                .put(child::update)
                .delete(child::delete),
        )
        .route(
            "/children/{child_id}/wishlist",
            get(wishlist_item::list_by_child).post(wishlist_item::create),
        )
        .route(
            "/wishlist-items/{id}",
            put(wishlist_item::update).delete(wishlist_item::delete),
        )
}
