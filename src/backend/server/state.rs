/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` holds:
 * - The forum store (`Arc<dyn ForumStore>`), memory or PostgreSQL
 * - The live-update registry shared by every WebSocket connection
 * - The configuration the server was started with
 *
 * Handlers that only read take `State<Arc<dyn ForumStore>>`; handlers that
 * mutate and broadcast take the whole `State<AppState>`.
 */
use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::realtime::LiveRegistry;
use crate::backend::store::ForumStore;
use crate::shared::AppConfig;

/// Application state shared by all request handlers
///
/// # Usage
///
/// ```rust
/// use std::sync::Arc;
/// use forum_live::backend::server::state::AppState;
/// use forum_live::backend::store::MemoryStore;
/// use forum_live::shared::AppConfig;
///
/// let state = AppState::new(Arc::new(MemoryStore::new()), AppConfig::default());
/// assert_eq!(state.live.subscriber_count(), 0);
/// ```
#[derive(Clone)]
pub struct AppState {
    /// Question and answer persistence
    pub store: Arc<dyn ForumStore>,

    /// Registry of connected live-update subscribers
    ///
    /// Cloning the registry shares the same subscriber map.
    pub live: LiveRegistry,

    pub config: AppConfig,
}

impl AppState {
    pub fn new(store: Arc<dyn ForumStore>, config: AppConfig) -> Self {
        Self {
            store,
            live: LiveRegistry::new(),
            config,
        }
    }
}

/// Implement FromRef for the forum store
///
/// This allows read-only handlers to extract `State<Arc<dyn ForumStore>>`.
impl FromRef<AppState> for Arc<dyn ForumStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.store.clone()
    }
}

/// Implement FromRef for LiveRegistry
///
/// Used by the `/ws` upgrade handler and the health check.
impl FromRef<AppState> for LiveRegistry {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.live.clone()
    }
}
