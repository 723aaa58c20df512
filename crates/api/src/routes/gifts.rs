//! Route definitions for the gift inventory.

use axum::routing::get;
use axum::Router;

use crate::handlers::gift;
use crate::state::AppState;

/// Routes mounted at `/gifts`.
///
/// ```text
/// GET    /      -> list
/// POST   /      -> create
/// GET    /{id}  -> get_by_id
/// PUT    /{id}  -> update
/// DELETE /{id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().nest(
        "/gifts",
        Router::new()
            .route("/", get(gift::list).post(gift::create))
            .route(
                "/{id}",
                get(gift::get_by_id).put(gift::update).delete(gift::delete),
            ),
    )
}
