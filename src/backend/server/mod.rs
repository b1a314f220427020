//! Server Module
//!
//! This module contains the code that assembles the Axum application.
//!
//! # Architecture
//!
//! - **`state`** - `AppState` and its `FromRef` implementations
//! - **`config`** - Store selection from the loaded configuration
//! - **`init`** - State construction and app creation
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Store loading (PostgreSQL or memory)
//! └── init.rs         - Server initialization and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Store Selection**: Connects and migrates PostgreSQL when configured
//! 2. **Seeding**: Inserts sample questions into an empty store
//! 3. **State Creation**: Creates the live-update registry
//! 4. **Router Creation**: Configures all routes and layers
//!
//! # Example
//!
//! ```rust,no_run
//! use forum_live::backend::server::create_app;
//! use forum_live::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::load()?;
//! let app = create_app(&config).await;
//! let listener = tokio::net::TcpListener::bind(config.bind_addr()?).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Application state structure and FromRef implementations
pub mod state;

/// Store selection
pub mod config;

/// Server initialization and app creation
pub mod init;

// Re-export commonly used types and functions
pub use init::{build_state, create_app};
pub use state::AppState;
