//! Shared helpers for HTTP-level integration tests.
//!
//! Builds the full application router through the same
//! [`build_app_router`](santaverse_api::router::build_app_router) used by
//! `main.rs`, so tests exercise the production middleware stack. Requests
//! are driven with `tower::ServiceExt::oneshot` -- no TCP listener.

#![allow(dead_code)] // Not every test binary uses every helper.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use santaverse_api::auth::jwt::{issue_access_token, JwtConfig};
use santaverse_api::auth::password::hash_password;
use santaverse_api::config::ServerConfig;
use santaverse_api::router::build_app_router;
use santaverse_api::state::AppState;
use santaverse_api::ws::WsManager;
use santaverse_core::types::DbId;
use santaverse_db::models::user::CreateUser;
use santaverse_db::repositories::{RoleRepo, UserRepo};
use santaverse_events::ChangeBus;
use santaverse_gateway::{GatewayConfig, RecommendationGateway};

/// Password used for every seeded test user.
pub const TEST_PASSWORD: &str = "sleigh-bells-ring-12";

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret-long-enough".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
    }
}

/// Gateway config pointing at a closed local port, so any request from a
/// test fails fast with a connection error (mapped to 502 by the API).
fn test_gateway_config() -> GatewayConfig {
    GatewayConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        api_key: "test-key".to_string(),
        model: "test-model".to_string(),
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        ws_manager: Arc::new(WsManager::new()),
        change_bus: Arc::new(ChangeBus::default()),
        gateway: Arc::new(RecommendationGateway::new(test_gateway_config())),
    };
    build_app_router(state, &config)
}

/// A seeded user plus a valid access token for it.
pub struct TestUser {
    pub id: DbId,
    pub token: String,
}

/// Insert a user with the given role name and mint an access token.
pub async fn seed_user_with_role(pool: &PgPool, username: &str, role_name: &str) -> TestUser {
    let role = RoleRepo::find_by_name(pool, role_name)
        .await
        .expect("role query should succeed")
        .expect("role should be seeded by migrations");

    let password_hash = hash_password(TEST_PASSWORD).expect("hashing should succeed");
    let user = UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            email: format!("{username}@northpole.test"),
            password_hash,
            role_id: role.id,
        },
    )
    .await
    .expect("user insert should succeed");

    let token = issue_access_token(user.id, role_name, &test_config().jwt)
        .expect("token generation should succeed");

    TestUser {
        id: user.id,
        token,
    }
}

/// Insert a regular user named `kris` and mint a token.
pub async fn seed_user(pool: &PgPool) -> TestUser {
    seed_user_with_role(pool, "kris", "user").await
}

/// Insert an admin named `mrs-claus` and mint a token.
pub async fn seed_admin(pool: &PgPool) -> TestUser {
    seed_user_with_role(pool, "mrs-claus", "admin").await
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

fn with_auth(builder: axum::http::request::Builder, token: Option<&str>) -> axum::http::request::Builder {
    match token {
        Some(t) => builder.header("authorization", format!("Bearer {t}")),
        None => builder,
    }
}

/// Send a GET request.
pub async fn get(app: Router, uri: &str, token: Option<&str>) -> Response<Body> {
    let request = with_auth(Request::builder().method("GET").uri(uri), token)
        .body(Body::empty())
        .expect("request should build");
    app.oneshot(request).await.expect("request should complete")
}

/// Send a DELETE request.
pub async fn delete(app: Router, uri: &str, token: Option<&str>) -> Response<Body> {
    let request = with_auth(Request::builder().method("DELETE").uri(uri), token)
        .body(Body::empty())
        .expect("request should build");
    app.oneshot(request).await.expect("request should complete")
}

/// Send a POST request with a JSON body.
pub async fn post_json(
    app: Router,
    uri: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> Response<Body> {
    let request = with_auth(Request::builder().method("POST").uri(uri), token)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request should build");
    app.oneshot(request).await.expect("request should complete")
}

/// Send a POST request with an empty body.
pub async fn post_empty(app: Router, uri: &str, token: Option<&str>) -> Response<Body> {
    let request = with_auth(Request::builder().method("POST").uri(uri), token)
        .body(Body::empty())
        .expect("request should build");
    app.oneshot(request).await.expect("request should complete")
}

/// Send a PUT request with a JSON body.
pub async fn put_json(
    app: Router,
    uri: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> Response<Body> {
    let request = with_auth(Request::builder().method("PUT").uri(uri), token)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request should build");
    app.oneshot(request).await.expect("request should complete")
}

/// Read a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}
