/**
 * Server Configuration
 *
 * This module handles loading of server configuration from the
 * environment, with sensible defaults for local development.
 *
 * # Configuration Surface
 *
 * - `SERVER_PORT` - listening port (default 3000)
 * - `DATABASE_URL` - SQLite connection string (default `sqlite:blog.db`)
 * - `SESSION_SECRET` - fixed secret for session-cookie signing
 * - `BCRYPT_COST` - bcrypt work factor for password hashing
 */

/// Application configuration, loaded once at startup
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Listening port
    pub port: u16,
    /// SQLite connection string
    pub database_url: String,
    /// Secret used to sign session cookies
    pub session_secret: String,
    /// bcrypt work factor for password hashing
    pub bcrypt_cost: u32,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Missing variables fall back to development defaults; a missing
    /// `SESSION_SECRET` is logged as a warning because sessions signed
    /// with the fallback secret are not safe outside development.
    pub fn from_env() -> Self {
        let port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000);

        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:blog.db".to_string());

        let session_secret = std::env::var("SESSION_SECRET").unwrap_or_else(|_| {
            tracing::warn!("SESSION_SECRET not set, using development fallback");
            "dev-session-secret-change-in-production".to_string()
        });

        let bcrypt_cost = std::env::var("BCRYPT_COST")
            .ok()
            .and_then(|c| c.parse().ok())
            .unwrap_or(bcrypt::DEFAULT_COST);

        Self {
            port,
            database_url,
            session_secret,
            bcrypt_cost,
        }
    }
}
