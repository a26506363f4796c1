/**
 * Server Initialization
 *
 * This module handles the initialization of the Axum HTTP server:
 * opening the database pool, running migrations, and assembling the
 * router with its state.
 *
 * # Initialization Process
 *
 * 1. Open the SQLite pool (creating the database file if missing)
 * 2. Run `sqlx` migrations
 * 3. Build the application state
 * 4. Create and configure the router
 *
 * Unlike optional integrations, the database is required: the server
 * refuses to start when the pool or the migrations fail.
 */

use std::str::FromStr;

use axum::Router;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::routes::router::create_router;
use crate::server::config::AppConfig;
use crate::server::state::AppState;

/// Open the database pool and run migrations
///
/// Foreign keys are enabled on every connection so the comment rows of
/// a deleted post are removed by the schema's ON DELETE CASCADE.
pub async fn connect_database(config: &AppConfig) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!("Connecting to database at {}", config.database_url);

    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new().connect_with(options).await?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Database migrations completed");

    Ok(pool)
}

/// Create and configure the Axum application
///
/// # Returns
///
/// Configured Axum Router ready to serve requests, or the database
/// error that prevented startup.
pub async fn create_app(config: AppConfig) -> Result<Router<()>, sqlx::Error> {
    tracing::info!("Initializing blog server");

    let pool = connect_database(&config).await?;
    let app_state = AppState::new(pool, config);

    Ok(create_router(app_state))
}
