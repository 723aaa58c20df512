//! Liveness endpoint test.

mod common;

use axum::http::StatusCode;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_healthz_reports_ok_without_auth(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = common::get(app, "/healthz", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = common::body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["db"], "up");
    assert!(json["version"].is_string());
}
