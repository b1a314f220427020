/**
 * Server Configuration
 *
 * This module picks the forum store the server runs against.
 *
 * # Store Selection
 *
 * - `database_url` unset: in-memory store
 * - `database_url` set and reachable: PostgreSQL store, migrations applied
 * - connection or migration failure: logged, in-memory store
 *
 * Configuration errors never prevent startup; the server keeps serving from
 * memory so the API stays available.
 */
use std::sync::Arc;

use crate::backend::store::{ForumStore, MemoryStore, PgStore};
use crate::shared::AppConfig;

/// Load and initialize the forum store
///
/// # Example
///
/// ```rust
/// use forum_live::backend::server::config::load_store;
/// use forum_live::shared::AppConfig;
///
/// # async fn example() {
/// let store = load_store(&AppConfig::default()).await;
/// assert!(store.all_questions().await.unwrap().is_empty());
/// # }
/// ```
pub async fn load_store(config: &AppConfig) -> Arc<dyn ForumStore> {
    let database_url = match config.database_url.as_deref() {
        Some(url) => url,
        None => {
            tracing::warn!("DATABASE_URL not set. Using in-memory store.");
            return Arc::new(MemoryStore::new());
        }
    };

    tracing::info!("Connecting to database...");

    let store = match PgStore::connect(database_url).await {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            tracing::warn!("Falling back to in-memory store.");
            return Arc::new(MemoryStore::new());
        }
    };

    tracing::info!("Running database migrations...");
    if let Err(e) = store.migrate().await {
        tracing::error!("Failed to run database migrations: {}", e);
        tracing::warn!("Falling back to in-memory store.");
        return Arc::new(MemoryStore::new());
    }

    tracing::info!("Database ready");
    Arc::new(store)
}
