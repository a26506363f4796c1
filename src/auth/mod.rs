//! Authentication Module
//!
//! This module handles user accounts, session tokens, and the
//! register/login/logout endpoints.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and database operations
//! ├── sessions.rs     - Signed session-cookie tokens
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── register.rs - Registration
//!     ├── login.rs    - Login
//!     └── logout.rs   - Logout
//! ```
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage, at the cost set
//!   in server configuration
//! - Sessions are signed tokens in an http-only cookie; the signing
//!   secret comes from configuration
//! - Password verification is constant-time via bcrypt
//! - Email uniqueness is enforced by the database constraint, so
//!   concurrent registrations cannot both succeed

/// User data model and database operations
pub mod users;

/// Session token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used items
pub use handlers::{login, login_form, logout, register, register_form};
pub use users::User;
