//! Comment Module
//!
//! Comment model, database operations, and the submission handler.
//! Comments are created by authenticated readers on a post's page and
//! are never edited or deleted individually.

/// Comment model and database operations
pub mod db;

/// HTTP handler for comment submission
pub mod handlers;

pub use db::Comment;
