//! Route definitions for deliveries.

use axum::routing::get;
use axum::Router;

use crate::handlers::delivery;
use crate::state::AppState;

/// Routes mounted at `/deliveries`.
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
        "/deliveries",
        Router::new()
            .route("/", get(delivery::list).post(delivery::create))
            .route(
                "/{id}",
                get(delivery::get_by_id)
                    .put(delivery::update)
                    .delete(delivery::delete),
            ),
    )
}
