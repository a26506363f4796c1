/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the `FromRef` traits for Axum state extraction.
 *
 * # State Extraction
 *
 * The `FromRef` implementations allow handlers to extract specific
 * parts of the state (the pool, the configuration) without needing the
 * entire `AppState`.
 */

use axum::extract::FromRef;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::server::config::AppConfig;

/// Application state shared across all request handlers
///
/// # Fields
///
/// * `db_pool` - SQLite connection pool; the single shared resource
/// * `config` - Immutable server configuration
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db_pool: SqlitePool,
    /// Server configuration (port, secrets, hashing cost)
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Build state from a connected pool and loaded configuration
    pub fn new(db_pool: SqlitePool, config: AppConfig) -> Self {
        Self {
            db_pool,
            config: Arc::new(config),
        }
    }
}

/// Allow handlers to extract the pool directly with `State<SqlitePool>`
impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

/// Allow handlers to extract the configuration directly
impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}
