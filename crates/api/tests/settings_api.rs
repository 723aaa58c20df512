//! HTTP-level integration tests for settings, the dashboard summary, and
//! demo seeding.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_empty, post_json, put_json, seed_user, seed_user_with_role};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_settings_404_until_saved(pool: PgPool) {
    let user = seed_user(&pool).await;
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/settings", Some(&user.token)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_settings_upsert_keeps_single_row(pool: PgPool) {
    let user = seed_user(&pool).await;

    // First save inserts.
    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        "/api/v1/settings",
        Some(&user.token),
        serde_json::json!({"countdown_target": "2026-12-25T00:00:00Z"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let first = body_json(response).await;

    // Second save updates the same row.
    let app = common::build_test_app(pool.clone());
    let second = body_json(
        put_json(
            app,
            "/api/v1/settings",
            Some(&user.token),
            serde_json::json!({"countdown_target": "2026-12-24T18:00:00Z"}),
        )
        .await,
    )
    .await;
    assert_eq!(first["id"], second["id"]);

    let app = common::build_test_app(pool);
    let fetched = body_json(get(app, "/api/v1/settings", Some(&user.token)).await).await;
    assert_eq!(fetched["countdown_target"], "2026-12-24T18:00:00Z");
}

// ---------------------------------------------------------------------------
// Demo seeding
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_demo_seed_populates_empty_workspace(pool: PgPool) {
    let user = seed_user(&pool).await;

    let app = common::build_test_app(pool.clone());
    let response = post_empty(app, "/api/v1/demo/seed", Some(&user.token)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let report = body_json(response).await;
    assert_eq!(report["seeded"], true);
    assert_eq!(report["children"], 5);
    assert_eq!(report["wishlist_items"], 4);
    assert_eq!(report["gifts"], 5);
    assert_eq!(report["elves"], 5);
    assert_eq!(report["tasks"], 5);
    assert_eq!(report["deliveries"], 6);

    // Data is visible through the normal endpoints.
    let app = common::build_test_app(pool);
    let children = body_json(get(app, "/api/v1/children", Some(&user.token)).await).await;
    assert_eq!(children.as_array().unwrap().len(), 5);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_demo_seed_is_noop_when_data_exists(pool: PgPool) {
    let user = seed_user(&pool).await;

    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/v1/children",
        Some(&user.token),
        serde_json::json!({"name": "Real Child", "age": 10, "country": "Norway", "region": "Europe"}),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let report = body_json(post_empty(app, "/api/v1/demo/seed", Some(&user.token)).await).await;
    assert_eq!(report["seeded"], false);
    assert_eq!(report["children"], 0);

    let app = common::build_test_app(pool);
    let children = body_json(get(app, "/api/v1/children", Some(&user.token)).await).await;
    assert_eq!(children.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_demo_seed_scoped_per_owner(pool: PgPool) {
    let alice = seed_user_with_role(&pool, "alice", "user").await;
    let bob = seed_user_with_role(&pool, "bob", "user").await;

    let app = common::build_test_app(pool.clone());
    post_empty(app, "/api/v1/demo/seed", Some(&alice.token)).await;

    // Bob's workspace is still empty, and his own seed works.
    let app = common::build_test_app(pool.clone());
    let children = body_json(get(app, "/api/v1/children", Some(&bob.token)).await).await;
    assert_eq!(children.as_array().unwrap().len(), 0);

    let app = common::build_test_app(pool);
    let report = body_json(post_empty(app, "/api/v1/demo/seed", Some(&bob.token)).await).await;
    assert_eq!(report["seeded"], true);
}

// ---------------------------------------------------------------------------
// Dashboard summary
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_dashboard_summary_empty_workspace(pool: PgPool) {
    let user = seed_user(&pool).await;
    let app = common::build_test_app(pool);

    let json = body_json(get(app, "/api/v1/dashboard/summary", Some(&user.token)).await).await;
    assert_eq!(json["children_total"], 0);
    assert_eq!(json["tasks_open"], 0);
    assert!(json["elf_efficiency_avg"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_dashboard_summary_after_demo_seed(pool: PgPool) {
    let user = seed_user(&pool).await;

    let app = common::build_test_app(pool.clone());
    post_empty(app, "/api/v1/demo/seed", Some(&user.token)).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/dashboard/summary", Some(&user.token)).await).await;

    // Matches the demo dataset: 4 nice, 1 naughty, 1 ready gift, all
    // tasks still open, no gifts delivered yet.
    assert_eq!(json["children_total"], 5);
    assert_eq!(json["children_nice"], 4);
    assert_eq!(json["children_naughty"], 1);
    assert_eq!(json["children_pending"], 0);
    assert_eq!(json["gifts_total"], 5);
    assert_eq!(json["gifts_ready"], 1);
    assert_eq!(json["elves_total"], 5);
    assert_eq!(json["tasks_open"], 5);
    assert_eq!(json["deliveries_delivered"], 0);

    let avg = json["elf_efficiency_avg"].as_f64().unwrap();
    assert!((avg - 89.2).abs() < 1e-9, "unexpected average: {avg}");
}
