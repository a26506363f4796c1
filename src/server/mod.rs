//! Server Module
//!
//! This module contains the code for initializing and configuring the
//! Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Configuration loading (env variables)
//! └── init.rs         - Pool setup, migrations, app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: reads port, database URL, session
//!    secret and hashing cost from the environment
//! 2. **Database Setup**: opens the SQLite pool and runs migrations
//! 3. **Router Creation**: configures all routes with the shared state

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::AppConfig;
pub use init::create_app;
pub use state::AppState;
