pub mod admin;
pub mod ai;
pub mod auth;
pub mod children;
pub mod dashboard;
pub mod deliveries;
pub mod demo;
pub mod elves;
pub mod gifts;
pub mod health;
pub mod settings;
pub mod tasks;

use axum::routing::get;
use axum::Router;

use crate::state::AppState;
use crate::ws;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /ws                                WebSocket change feed (token query param)
///
/// /auth/login                        login (public)
/// /auth/refresh                      refresh (public)
/// /auth/logout                       logout (requires auth)
/// /auth/me                           current user info (requires auth)
///
/// /admin/users                       list, create (admin only)
/// /admin/users/{id}                  get, update
/// /admin/users/{id}/deactivate       deactivate (POST)
///
/// /children                          list, create
/// /children/{id}                     get, update, delete
/// /children/{child_id}/wishlist      list, create
/// /wishlist-items/{id}               update, delete
///
/// /gifts                             list, create
/// /gifts/{id}                        get, update, delete
/// /elves                             list, create
/// /elves/{id}                        get, update, delete
/// /tasks                             list, create
/// /tasks/{id}                        get, update, delete
/// /deliveries                        list, create
/// /deliveries/{id}                   get, update, delete
///
/// /settings                          get, save (upsert)
/// /dashboard/summary                 aggregate counters (GET)
/// /demo/seed                         seed demo dataset (POST)
/// /ai/recommendations                AI recommendations (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/ws", get(ws::ws_handler))
        .merge(auth::router())
        .merge(admin::router())
        .merge(children::router())
        .merge(gifts::router())
        .merge(elves::router())
        .merge(tasks::router())
        .merge(deliveries::router())
        .merge(settings::router())
        .merge(dashboard::router())
        .merge(demo::router())
        .merge(ai::router())
}
