//! Database operations for blog posts
//!
//! Post titles are unique; the UNIQUE constraint decides conflicts and
//! callers translate the violation into `DuplicateTitle`. The display
//! date is assigned here at creation time and never changed by edits.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::forms::PostForm;

/// A published blog post
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct BlogPost {
    pub id: i64,
    pub title: String,
    pub subtitle: String,
    /// Display date string, e.g. "August 07, 2026"
    pub date: String,
    /// Rich-text body, stored opaque
    pub body: String,
    pub img_url: String,
    /// Author display name shown on the post
    pub author: String,
    /// Owning user, kept when the account outlives the post form
    pub user_id: Option<i64>,
}

/// List all posts in storage order
pub async fn list_posts(pool: &SqlitePool) -> Result<Vec<BlogPost>, sqlx::Error> {
    sqlx::query_as::<_, BlogPost>(
        r#"
        SELECT id, title, subtitle, date, body, img_url, author, user_id
        FROM blog_posts
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Get a post by ID
pub async fn get_post_by_id(pool: &SqlitePool, id: i64) -> Result<Option<BlogPost>, sqlx::Error> {
    sqlx::query_as::<_, BlogPost>(
        r#"
        SELECT id, title, subtitle, date, body, img_url, author, user_id
        FROM blog_posts
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Create a new post
///
/// The display date is stamped server-side at creation.
pub async fn create_post(
    pool: &SqlitePool,
    form: &PostForm,
    user_id: i64,
) -> Result<BlogPost, sqlx::Error> {
    let date = Utc::now().format("%B %d, %Y").to_string();

    sqlx::query_as::<_, BlogPost>(
        r#"
        INSERT INTO blog_posts (title, subtitle, date, body, img_url, author, user_id)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        RETURNING id, title, subtitle, date, body, img_url, author, user_id
        "#,
    )
    .bind(&form.title)
    .bind(&form.subtitle)
    .bind(&date)
    .bind(&form.body)
    .bind(&form.img_url)
    .bind(&form.author)
    .bind(user_id)
    .fetch_one(pool)
    .await
}

/// Update all content fields of a post
///
/// The stored date is left untouched. Returns None when the post does
/// not exist.
pub async fn update_post(
    pool: &SqlitePool,
    id: i64,
    form: &PostForm,
) -> Result<Option<BlogPost>, sqlx::Error> {
    sqlx::query_as::<_, BlogPost>(
        r#"
        UPDATE blog_posts
        SET title = ?, subtitle = ?, body = ?, img_url = ?, author = ?
        WHERE id = ?
        RETURNING id, title, subtitle, date, body, img_url, author, user_id
        "#,
    )
    .bind(&form.title)
    .bind(&form.subtitle)
    .bind(&form.body)
    .bind(&form.img_url)
    .bind(&form.author)
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Delete a post and its comments
///
/// The comment delete is explicit inside the same transaction, in
/// addition to the schema's ON DELETE CASCADE. Returns false when no
/// post with this id existed.
pub async fn delete_post(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM comments WHERE post_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    let result = sqlx::query("DELETE FROM blog_posts WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(result.rows_affected() > 0)
}
