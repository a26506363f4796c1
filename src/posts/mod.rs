//! Blog Post Module
//!
//! Post model, database operations, and the controllers for reading
//! and mutating posts.
//!
//! # Module Structure
//!
//! ```text
//! posts/
//! ├── mod.rs      - Module exports and documentation
//! ├── db.rs       - BlogPost model and database operations
//! └── handlers.rs - HTTP handlers (index, show, new, edit, delete)
//! ```

/// BlogPost model and database operations
pub mod db;

/// HTTP handlers for post routes
pub mod handlers;

pub use db::BlogPost;
