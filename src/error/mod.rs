//! Error Module
//!
//! This module defines error types for the blog server.
//! These errors are used in HTTP handlers and can be converted to HTTP responses.
//!
//! # Architecture
//!
//! The error module is organized into focused submodules:
//!
//! - **`types`** - Error type definitions and status mapping
//! - **`conversion`** - Error conversion implementations (IntoResponse)
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - Error conversion implementations
//! ```
//!
//! # Error Taxonomy
//!
//! - `DuplicateEmail` / `DuplicateTitle` - uniqueness conflicts on write
//! - `UserNotFound` / `InvalidCredentials` - authentication failures
//! - `Forbidden` - authorization failure on admin-only routes
//! - `NotFound` - missing post or page
//! - `Validation` - structural form validation failure
//! - `Database` / `Session` / `Hash` - infrastructure failures
//!
//! # HTTP Response Conversion
//!
//! `AppError` implements `IntoResponse` from Axum, allowing it to be
//! returned directly from handlers. The error is converted to an
//! appropriate HTTP status code and a rendered error page.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::AppError;
