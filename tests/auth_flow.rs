//! Authentication integration tests
//!
//! Drive registration, login, and logout through the full router and
//! assert both the HTTP outcomes and the persisted state.

mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use common::{count_rows, login, register, test_server};

#[tokio::test]
async fn test_register_logs_in_and_redirects() {
    let (server, pool) = test_server().await;

    register(&server, "user@example.com", "password123", "User Name").await;

    assert_eq!(count_rows(&pool, "users").await, 1);

    // The saved session cookie makes the index render logged-in.
    let response = server.get("/").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.text();
    assert!(body.contains("Log Out"));
    assert!(body.contains("User Name"));
}

#[tokio::test]
async fn test_register_duplicate_email_conflict() {
    let (mut server, pool) = test_server().await;

    register(&server, "dup@example.com", "password123", "First").await;
    server.clear_cookies();

    let response = server
        .post("/register")
        .form(&json!({
            "email": "dup@example.com",
            "password": "password456",
            "name": "Second",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CONFLICT);
    assert!(response.text().contains("already registered"));
    // No second user row was created.
    assert_eq!(count_rows(&pool, "users").await, 1);
}

#[tokio::test]
async fn test_register_validation_failure_writes_nothing() {
    let (server, pool) = test_server().await;

    let response = server
        .post("/register")
        .form(&json!({
            "email": "not-an-email",
            "password": "short",
            "name": "",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = response.text();
    assert!(body.contains("Enter a valid email address"));
    assert!(body.contains("Password must be at least 8 characters"));
    assert!(body.contains("Name is required"));
    assert_eq!(count_rows(&pool, "users").await, 0);
}

#[tokio::test]
async fn test_login_round_trip() {
    let (mut server, _pool) = test_server().await;

    register(&server, "user@example.com", "rightpw12", "Name").await;
    server.clear_cookies();

    // Anonymous again after clearing the cookie.
    assert!(server.get("/").await.text().contains("Log In"));

    login(&server, "user@example.com", "rightpw12").await;

    let body = server.get("/").await.text();
    assert!(body.contains("Log Out"));
}

#[tokio::test]
async fn test_login_wrong_password_unauthorized() {
    let (mut server, _pool) = test_server().await;

    register(&server, "user@example.com", "rightpw12", "Name").await;
    server.clear_cookies();

    let response = server
        .post("/login")
        .form(&json!({
            "email": "user@example.com",
            "password": "wrongpw12",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert!(response.text().contains("Incorrect password"));

    // No session was established.
    assert!(server.get("/").await.text().contains("Log In"));
}

#[tokio::test]
async fn test_login_unknown_email_unauthorized() {
    let (server, _pool) = test_server().await;

    let response = server
        .post("/login")
        .form(&json!({
            "email": "nobody@example.com",
            "password": "password123",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert!(response.text().contains("Register instead"));
}

#[tokio::test]
async fn test_logout_clears_session_and_is_idempotent() {
    let (server, _pool) = test_server().await;

    register(&server, "user@example.com", "password123", "Name").await;
    assert!(server.get("/").await.text().contains("Log Out"));

    let response = server.get("/logout").await;
    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    assert!(server.get("/").await.text().contains("Log In"));

    // Logging out without a session is the same redirect.
    let response = server.get("/logout").await;
    assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
}
