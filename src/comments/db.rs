//! Database operations for comments
//!
//! Comments are append-only: nothing in the HTTP surface edits or
//! deletes an individual comment. They disappear only with their post.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// A stored comment
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Comment {
    pub id: i64,
    pub text: String,
    pub user_id: i64,
    pub post_id: i64,
    pub created_at: DateTime<Utc>,
}

/// A comment joined with its author's display name, for rendering
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct CommentWithAuthor {
    pub id: i64,
    pub text: String,
    pub author_name: String,
}

/// Create a comment on a post
///
/// Both foreign keys must resolve; the caller checks the post exists
/// and the user id comes from an authenticated session.
pub async fn create_comment(
    pool: &SqlitePool,
    post_id: i64,
    user_id: i64,
    text: &str,
) -> Result<Comment, sqlx::Error> {
    let now = Utc::now();

    sqlx::query_as::<_, Comment>(
        r#"
        INSERT INTO comments (text, user_id, post_id, created_at)
        VALUES (?, ?, ?, ?)
        RETURNING id, text, user_id, post_id, created_at
        "#,
    )
    .bind(text)
    .bind(user_id)
    .bind(post_id)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// List a post's comments with author names, oldest first
pub async fn list_comments_for_post(
    pool: &SqlitePool,
    post_id: i64,
) -> Result<Vec<CommentWithAuthor>, sqlx::Error> {
    sqlx::query_as::<_, CommentWithAuthor>(
        r#"
        SELECT comments.id, comments.text, users.name AS author_name
        FROM comments
        JOIN users ON users.id = comments.user_id
        WHERE comments.post_id = ?
        ORDER BY comments.id
        "#,
    )
    .bind(post_id)
    .fetch_all(pool)
    .await
}

/// Count comments on a post
pub async fn count_comments_for_post(pool: &SqlitePool, post_id: i64) -> Result<i64, sqlx::Error> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM comments WHERE post_id = ?")
        .bind(post_id)
        .fetch_one(pool)
        .await?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::PostForm;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_pool() -> SqlitePool {
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

    async fn seed_post(pool: &SqlitePool) -> (i64, i64) {
        let user = crate::auth::users::create_user(
            pool,
            "commenter@example.com".to_string(),
            "hash".to_string(),
            "Commenter".to_string(),
        )
        .await
        .unwrap();

        let form = PostForm {
            title: "Commented Post".to_string(),
            subtitle: "sub".to_string(),
            img_url: "https://example.com/i.jpg".to_string(),
            author: "Author".to_string(),
            body: "<p>text</p>".to_string(),
        };
        let post = crate::posts::db::create_post(pool, &form, user.id)
            .await
            .unwrap();

        (post.id, user.id)
    }

    #[tokio::test]
    async fn test_create_and_list_with_author_name() {
        let pool = test_pool().await;
        let (post_id, user_id) = seed_post(&pool).await;

        create_comment(&pool, post_id, user_id, "first").await.unwrap();
        create_comment(&pool, post_id, user_id, "second").await.unwrap();

        let comments = list_comments_for_post(&pool, post_id).await.unwrap();
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].text, "first");
        assert_eq!(comments[0].author_name, "Commenter");
        assert_eq!(count_comments_for_post(&pool, post_id).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_comment_requires_existing_post() {
        let pool = test_pool().await;
        let (_post_id, user_id) = seed_post(&pool).await;

        let err = create_comment(&pool, 9999, user_id, "orphan").await;
        assert!(err.is_err());
    }
}
