//! HTTP-level integration tests for the entity CRUD endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json, seed_user, seed_user_with_role};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Children CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_child_returns_201(pool: PgPool) {
    let user = seed_user(&pool).await;
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/children",
        Some(&user.token),
        serde_json::json!({
            "name": "Emma Thompson",
            "age": 7,
            "country": "United States",
            "region": "North America",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Emma Thompson");
    assert_eq!(json["behavior_score"], 50);
    assert_eq!(json["status"], "pending");
    assert!(json["id"].is_number());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_child_by_id(pool: PgPool) {
    let user = seed_user(&pool).await;
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/children",
            Some(&user.token),
            serde_json::json!({"name": "Yuki", "age": 5, "country": "Japan", "region": "Asia"}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/children/{id}"), Some(&user.token)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["name"], "Yuki");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_nonexistent_child_returns_404(pool: PgPool) {
    let user = seed_user(&pool).await;
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/children/999999", Some(&user.token)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_child_is_partial(pool: PgPool) {
    let user = seed_user(&pool).await;
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/children",
            Some(&user.token),
            serde_json::json!({"name": "Oliver", "age": 11, "country": "United Kingdom", "region": "Europe"}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/children/{id}"),
        Some(&user.token),
        serde_json::json!({"status": "naughty", "behavior_score": 45}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    // Patched fields changed, the rest kept.
    assert_eq!(json["status"], "naughty");
    assert_eq!(json["behavior_score"], 45);
    assert_eq!(json["name"], "Oliver");
    assert_eq!(json["age"], 11);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_child_returns_204_then_404(pool: PgPool) {
    let user = seed_user(&pool).await;
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/children",
            Some(&user.token),
            serde_json::json!({"name": "Sofia", "age": 8, "country": "Mexico", "region": "North America"}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/children/{id}"), Some(&user.token)).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/children/{id}"), Some(&user.token)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_children_newest_first(pool: PgPool) {
    let user = seed_user(&pool).await;
    for name in ["First", "Second"] {
        let app = common::build_test_app(pool.clone());
        post_json(
            app,
            "/api/v1/children",
            Some(&user.token),
            serde_json::json!({"name": name, "age": 9, "country": "Germany", "region": "Europe"}),
        )
        .await;
    }

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/children", Some(&user.token)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let arr = json.as_array().unwrap();
    assert_eq!(arr.len(), 2);
}

// ---------------------------------------------------------------------------
// Ownership isolation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_children_are_scoped_to_owner(pool: PgPool) {
    let alice = seed_user_with_role(&pool, "alice", "user").await;
    let bob = seed_user_with_role(&pool, "bob", "user").await;

    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/children",
            Some(&alice.token),
            serde_json::json!({"name": "Private", "age": 6, "country": "France", "region": "Europe"}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    // Bob cannot read, update, or delete Alice's row.
    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/children/{id}"), Some(&bob.token)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/children/{id}"),
        Some(&bob.token),
        serde_json::json!({"name": "Hijacked"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/children/{id}"), Some(&bob.token)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Bob's list is empty; Alice still sees her row.
    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/children", Some(&bob.token)).await).await;
    assert_eq!(json.as_array().unwrap().len(), 0);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/children", Some(&alice.token)).await).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Wishlist items (nested under children)
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_wishlist_item_lifecycle(pool: PgPool) {
    let user = seed_user(&pool).await;
    let app = common::build_test_app(pool.clone());
    let child = body_json(
        post_json(
            app,
            "/api/v1/children",
            Some(&user.token),
            serde_json::json!({"name": "Emma", "age": 7, "country": "United States", "region": "North America"}),
        )
        .await,
    )
    .await;
    let child_id = child["id"].as_i64().unwrap();

    // Create an item under the child.
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/v1/children/{child_id}/wishlist"),
        Some(&user.token),
        serde_json::json!({"name": "Lego Star Wars Set", "category": "Toys", "priority": "high"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let item = body_json(response).await;
    assert_eq!(item["child_id"], child_id);
    assert_eq!(item["status"], "pending");
    assert_eq!(item["age_appropriate"], true);
    let item_id = item["id"].as_i64().unwrap();

    // Approve it.
    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/wishlist-items/{item_id}"),
        Some(&user.token),
        serde_json::json!({"status": "approved", "in_stock": true}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let item = body_json(response).await;
    assert_eq!(item["status"], "approved");
    assert_eq!(item["in_stock"], true);

    // List shows exactly one item.
    let app = common::build_test_app(pool.clone());
    let json = body_json(
        get(
            app,
            &format!("/api/v1/children/{child_id}/wishlist"),
            Some(&user.token),
        )
        .await,
    )
    .await;
    assert_eq!(json.as_array().unwrap().len(), 1);

    // Delete it.
    let app = common::build_test_app(pool.clone());
    let response = delete(
        app,
        &format!("/api/v1/wishlist-items/{item_id}"),
        Some(&user.token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let json = body_json(
        get(
            app,
            &format!("/api/v1/children/{child_id}/wishlist"),
            Some(&user.token),
        )
        .await,
    )
    .await;
    assert_eq!(json.as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_wishlist_under_unknown_child_returns_404(pool: PgPool) {
    let user = seed_user(&pool).await;
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/children/424242/wishlist",
        Some(&user.token),
        serde_json::json!({"name": "Mystery Box", "category": "Toys"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Gifts
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_gift_defaults_applied_on_create(pool: PgPool) {
    let user = seed_user(&pool).await;
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/gifts",
        Some(&user.token),
        serde_json::json!({"name": "Stuffed Unicorn", "category": "Plush"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["stock"], 0);
    assert_eq!(json["max_stock"], 100000);
    assert_eq!(json["status"], "manufacturing");
    assert_eq!(json["demand_level"], "medium");
    assert_eq!(json["production_progress"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_gift_progress_is_stored_unclamped(pool: PgPool) {
    // Percent clamping is a presentation concern; the data layer stores
    // whatever it is given.
    let user = seed_user(&pool).await;
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/gifts",
        Some(&user.token),
        serde_json::json!({"name": "Overdrive", "category": "Toys", "production_progress": 150}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["production_progress"], 150);
}

// ---------------------------------------------------------------------------
// Elves and tasks
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_task_assignment_to_own_elf(pool: PgPool) {
    let user = seed_user(&pool).await;
    let app = common::build_test_app(pool.clone());
    let elf = body_json(
        post_json(
            app,
            "/api/v1/elves",
            Some(&user.token),
            serde_json::json!({"name": "Jingle Sparklefoot", "skill": "toymaker"}),
        )
        .await,
    )
    .await;
    let elf_id = elf["id"].as_i64().unwrap();
    assert_eq!(elf["morale"], "good");
    assert_eq!(elf["energy_level"], 100);

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/tasks",
        Some(&user.token),
        serde_json::json!({
            "title": "Assemble 500 Lego Sets",
            "category": "Production",
            "priority": "urgent",
            "elf_id": elf_id,
            "deadline": "2026-12-20",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let task = body_json(response).await;
    assert_eq!(task["elf_id"], elf_id);
    assert_eq!(task["deadline"], "2026-12-20");

    // Deleting the elf unassigns the task at the database level.
    let task_id = task["id"].as_i64().unwrap();
    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/elves/{elf_id}"), Some(&user.token)).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let task = body_json(get(app, &format!("/api/v1/tasks/{task_id}"), Some(&user.token)).await).await;
    assert!(task["elf_id"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_task_with_foreign_elf_returns_404(pool: PgPool) {
    let alice = seed_user_with_role(&pool, "alice", "user").await;
    let bob = seed_user_with_role(&pool, "bob", "user").await;

    let app = common::build_test_app(pool.clone());
    let elf = body_json(
        post_json(
            app,
            "/api/v1/elves",
            Some(&alice.token),
            serde_json::json!({"name": "Tinsel McWrap", "skill": "wrapper"}),
        )
        .await,
    )
    .await;
    let elf_id = elf["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/tasks",
        Some(&bob.token),
        serde_json::json!({"title": "Steal work", "category": "Wrapping", "elf_id": elf_id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Deliveries
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delivery_crud(pool: PgPool) {
    let user = seed_user(&pool).await;
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/deliveries",
        Some(&user.token),
        serde_json::json!({"region": "Oceania", "total_gifts": 156789, "weather_risk": "high", "timezone": "UTC+10"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let delivery = body_json(response).await;
    assert_eq!(delivery["country"], "Multiple");
    assert_eq!(delivery["status"], "pending");
    assert_eq!(delivery["delivered"], 0);
    let id = delivery["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/deliveries/{id}"),
        Some(&user.token),
        serde_json::json!({"status": "in_transit", "delivered": 40000}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let delivery = body_json(response).await;
    assert_eq!(delivery["status"], "in_transit");
    assert_eq!(delivery["delivered"], 40000);
    assert_eq!(delivery["total_gifts"], 156789);
}
