//! Route definitions for the elf workforce.

use axum::routing::get;
use axum::Router;

use crate::handlers::elf;
use crate::state::AppState;

/// Routes mounted at `/elves`.
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
        "/elves",
        Router::new()
            .route("/", get(elf::list).post(elf::create))
            .route(
                "/{id}",
                get(elf::get_by_id).put(elf::update).delete(elf::delete),
            ),
    )
}
