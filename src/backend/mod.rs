//! Backend Module
//!
//! This module contains all server-side code for the forum: an Axum HTTP
//! server exposing the question and answer API, a WebSocket endpoint pushing
//! live updates, and the persistence layer behind both.
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, store selection
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`forum`** - Question, answer and tag request handlers
//! - **`realtime`** - Live-update subscriber registry and `/ws` handler
//! - **`store`** - `ForumStore` trait with memory and PostgreSQL backends
//! - **`error`** - Backend-specific error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - `forum-server` binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── forum/          - REST handlers
//! ├── realtime/       - Live-update broadcasting
//! ├── store/          - Persistence
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! A mutating request is parsed and validated, written through the store,
//! then broadcast to every registered subscriber before the response is
//! returned. Reads go straight to the store.
//!
//! # Thread Safety
//!
//! - The store is shared as `Arc<dyn ForumStore>`; both backends are `Send + Sync`
//! - The subscriber registry is `Arc<RwLock<HashMap<..>>>` and cheap to clone
//! - Each WebSocket connection runs a reader and a writer task

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Question, answer and tag handlers
pub mod forum;

/// Real-time update system
pub mod realtime;

/// Question and answer persistence
pub mod store;

/// Backend error types
pub mod error;

/// Re-export commonly used types
pub use error::BackendError;
pub use realtime::LiveRegistry;
pub use server::{create_app, AppState};
pub use store::{ForumStore, MemoryStore, PgStore};
