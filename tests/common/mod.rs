//! Common test utilities
//!
//! Builds the full application router over a fresh in-memory SQLite
//! database so integration tests drive the same route table, middleware
//! and state as the real server.

use std::sync::Arc;

use axum_test::{TestServer, TestServerConfig};
use serde_json::json;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use inkpost::routes::create_router;
use inkpost::server::{AppConfig, AppState};

/// Create a migrated in-memory database pool
///
/// A single connection keeps the in-memory database alive and shared
/// for the whole test.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("failed to run migrations");
    pool
}

/// Test configuration, with a low bcrypt cost to keep the suite fast
pub fn test_config() -> AppConfig {
    AppConfig {
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        session_secret: "test-session-secret".to_string(),
        bcrypt_cost: 4,
    }
}

/// Build a cookie-keeping TestServer over an existing pool
pub fn server_for_pool(pool: &SqlitePool) -> TestServer {
    let state = AppState {
        db_pool: pool.clone(),
        config: Arc::new(test_config()),
    };
    let app = create_router(state);

    let config = TestServerConfig {
        save_cookies: true,
        ..TestServerConfig::default()
    };
    TestServer::new_with_config(app, config).expect("failed to start test server")
}

/// Build a TestServer plus the pool behind it, for direct database
/// assertions
pub async fn test_server() -> (TestServer, SqlitePool) {
    let pool = test_pool().await;
    let server = server_for_pool(&pool);
    (server, pool)
}

/// Register an account through the HTTP surface
///
/// The server keeps the session cookie, so subsequent requests run as
/// this account until `clear_cookies`.
pub async fn register(server: &TestServer, email: &str, password: &str, name: &str) {
    let response = server
        .post("/register")
        .form(&json!({
            "email": email,
            "password": password,
            "name": name,
        }))
        .await;
    assert_eq!(
        response.status_code(),
        axum::http::StatusCode::SEE_OTHER,
        "registration for {email} did not redirect"
    );
}

/// Log in through the HTTP surface
pub async fn login(server: &TestServer, email: &str, password: &str) {
    let response = server
        .post("/login")
        .form(&json!({
            "email": email,
            "password": password,
        }))
        .await;
    assert_eq!(
        response.status_code(),
        axum::http::StatusCode::SEE_OTHER,
        "login for {email} did not redirect"
    );
}

/// A complete post form with the given title
pub fn post_form(title: &str) -> serde_json::Value {
    json!({
        "title": title,
        "subtitle": "A subtitle",
        "img_url": "https://example.com/cover.jpg",
        "author": "Author",
        "body": "<p>Post body</p>",
    })
}

/// Create a post through the HTTP surface (caller must hold an admin
/// session) and return its id
pub async fn create_post(server: &TestServer, pool: &SqlitePool, title: &str) -> i64 {
    let response = server.post("/new-post").form(&post_form(title)).await;
    assert_eq!(
        response.status_code(),
        axum::http::StatusCode::SEE_OTHER,
        "post creation for {title:?} did not redirect"
    );

    let (id,): (i64,) = sqlx::query_as("SELECT id FROM blog_posts WHERE title = ?")
        .bind(title)
        .fetch_one(pool)
        .await
        .expect("created post not found");
    id
}

/// Count rows in a table
pub async fn count_rows(pool: &SqlitePool, table: &str) -> i64 {
    let (count,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .expect("count query failed");
    count
}
