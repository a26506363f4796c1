//! Middleware Module
//!
//! This module contains HTTP middleware and identity extractors for the
//! blog server.
//!
//! # Architecture
//!
//! The middleware module currently provides:
//!
//! - **`auth`** - Session resolution, the optional-user extractor, and
//!   the admin gate applied to post-mutating routes

pub mod auth;

pub use auth::{require_admin, AuthUser, AuthenticatedUser, OptionalUser};
