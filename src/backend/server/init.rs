/**
 * Server Initialization
 *
 * This module builds the application state and router from an `AppConfig`.
 *
 * # Initialization Process
 *
 * 1. Select the store (PostgreSQL or memory)
 * 2. Seed sample data into an empty store when enabled
 * 3. Create the live-update registry and application state
 * 4. Create and configure the router
 */
use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_store;
use crate::backend::server::state::AppState;
use crate::backend::store::{seed_sample_data, ForumStore};
use crate::shared::AppConfig;

/// Create and configure the Axum application
///
/// # Error Handling
///
/// The function is designed to be resilient:
/// - Missing or unreachable database: the in-memory store is used
/// - Seeding failure: logged, the server starts with what it has
pub async fn create_app(config: &AppConfig) -> Router<()> {
    let state = build_state(config).await;
    create_router(state)
}

/// Build the application state without wrapping it in a router
///
/// Exposed so callers can keep a handle on the registry and store.
pub async fn build_state(config: &AppConfig) -> AppState {
    tracing::info!("Initializing forum backend");

    // Step 1: Select store
    let store = load_store(config).await;

    // Step 2: Seed a fresh install
    if config.seed_sample_data {
        seed_store(store.as_ref()).await;
    }

    // Step 3: Create state with an empty subscriber registry
    let state = AppState::new(store, config.clone());
    tracing::info!("Application state initialized");

    state
}

async fn seed_store(store: &dyn ForumStore) {
    if let Err(e) = seed_sample_data(store).await {
        tracing::error!("Failed to seed sample data: {:?}", e);
    }
}
