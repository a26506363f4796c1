//! Route Configuration Module
//!
//! This module assembles the HTTP route table for the blog server.
//!
//! # Route Organization
//!
//! - **Public routes** - index, post pages, registration, login,
//!   logout, about, contact
//! - **Admin routes** - new-post, edit-post, delete, behind the admin
//!   gate middleware
//! - **Static files** - under /static
//! - **Fallback** - rendered 404 page

/// Main router creation
pub mod router;

pub use router::create_router;
