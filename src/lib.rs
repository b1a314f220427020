//! Forum Live - Main Library
//!
//! A discussion forum backend: a REST API for questions and answers, and a
//! WebSocket channel that pushes every new question, new answer and like to
//! connected clients as it happens.
//!
//! # Module Structure
//!
//! - **`shared`** - Types with no server dependencies
//!   - Question and answer records, request bodies
//!   - Live-update event wire format
//!   - Tag counting, configuration, error types
//!
//! - **`backend`** - Server-side code
//!   - Axum HTTP server and route handlers
//!   - Live-update subscriber registry
//!   - In-memory and PostgreSQL stores
//!
//! # Usage
//!
//! ```rust,no_run
//! use forum_live::backend::server::create_app;
//! use forum_live::shared::AppConfig;
//!
//! # async fn example() {
//! let app = create_app(&AppConfig::default()).await;
//! // Use app with Axum server
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::SharedError` for payload validation and decoding
//! - `shared::ConfigError` for configuration loading
//! - `backend::store::StoreError` for persistence failures
//! - `backend::BackendError` for HTTP responses

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
