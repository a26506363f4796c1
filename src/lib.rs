//! Inkpost - Main Library
//!
//! Inkpost is a server-rendered blog platform built with Rust. Visitors
//! read posts and comments, registered readers comment, and a single
//! administrator account authors, edits, and deletes posts.
//!
//! # Overview
//!
//! This library provides the core functionality for Inkpost, including:
//! - Session-based authentication with bcrypt password hashing
//! - An admin gate over the post-mutating routes
//! - CRUD over posts, users, and comments backed by SQLite
//! - Structural form validation with field-level errors
//! - Server-rendered HTML pages
//!
//! # Module Structure
//!
//! - **`server`** - Configuration, application state, app construction
//! - **`routes`** - HTTP route table
//! - **`auth`** - Users, session tokens, register/login/logout
//! - **`middleware`** - Session resolution and the admin gate
//! - **`posts`** - Post model, persistence, controllers
//! - **`comments`** - Comment model, persistence, submission handler
//! - **`forms`** - Submitted-form schemas and validation
//! - **`pages`** - HTML render layer
//! - **`error`** - Error taxonomy and HTTP conversion
//!
//! # Usage
//!
//! ```rust,no_run
//! use inkpost::server::{create_app, AppConfig};
//!
//! # async fn example() -> Result<(), sqlx::Error> {
//! let config = AppConfig::from_env();
//! let app = create_app(config).await?;
//! // Serve app with axum
//! # Ok(())
//! # }
//! ```

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Blog posts
pub mod posts;

/// Comments
pub mod comments;

/// Form schemas and validation
pub mod forms;

/// HTML render layer
pub mod pages;

/// Error types
pub mod error;

// Re-export commonly used types
pub use error::AppError;
pub use routes::create_router;
pub use server::{create_app, AppConfig, AppState};
