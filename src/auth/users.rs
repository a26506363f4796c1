/**
 * User Model and Database Operations
 *
 * This module handles user data and database operations.
 *
 * Uniqueness of `email` is enforced by the UNIQUE constraint in the
 * schema; callers translate the constraint violation into
 * `AppError::DuplicateEmail`. There is no check-then-insert step, so
 * two concurrent registrations with the same email cannot both succeed.
 *
 * The first account ever created receives the admin flag. The flag is
 * computed inside the INSERT itself so the grant is atomic with the
 * row creation.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// User struct representing a user in the database
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (assigned by the database)
    pub id: i64,
    /// User email address (unique)
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Display name
    pub name: String,
    /// Administrative capability flag
    pub is_admin: bool,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Create a new user
///
/// The first user ever inserted becomes the administrator; the flag is
/// derived from the table population inside the same statement.
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `email` - User email
/// * `password_hash` - Hashed password
/// * `name` - Display name
///
/// # Returns
/// Created user, or the underlying database error (a UNIQUE violation
/// when the email is already registered)
pub async fn create_user(
    pool: &SqlitePool,
    email: String,
    password_hash: String,
    name: String,
) -> Result<User, sqlx::Error> {
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (email, password_hash, name, is_admin, created_at)
        VALUES (?, ?, ?, (SELECT COUNT(*) FROM users) = 0, ?)
        RETURNING id, email, password_hash, name, is_admin, created_at
        "#,
    )
    .bind(&email)
    .bind(&password_hash)
    .bind(&name)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Get user by email
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_email(
    pool: &SqlitePool,
    email: &str,
) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, password_hash, name, is_admin, created_at
        FROM users
        WHERE email = ?
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Get user by ID
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_id(pool: &SqlitePool, id: i64) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, password_hash, name, is_admin, created_at
        FROM users
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Count registered users
pub async fn count_users(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;
    Ok(count)
}
