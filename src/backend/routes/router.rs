/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. Live-update and health routes (`/ws`, `/health`)
 * 2. API routes (`/api/...`)
 * 3. Fallback (static frontend bundle or JSON 404)
 * 4. Layers (CORS when enabled, request tracing)
 */
use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::backend::error::BackendError;
use crate::backend::forum::health_check;
use crate::backend::realtime::handle_live_subscription;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state containing the store, registry and config
///
/// # Fallback
///
/// When `static_dir` is configured, unknown paths are served from it (the
/// built frontend). Otherwise they get a JSON 404 body.
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new()
        .route("/ws", get(handle_live_subscription))
        .route("/health", get(health_check));

    // Add API routes
    let router = configure_api_routes(router);

    // Static frontend or JSON 404
    let router = match &app_state.config.static_dir {
        Some(dir) => {
            tracing::info!("Serving static files from {}", dir.display());
            router.fallback_service(ServeDir::new(dir))
        }
        None => router.fallback(route_not_found),
    };

    let router = if app_state.config.enable_cors {
        router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
    } else {
        router
    };

    router
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

async fn route_not_found() -> BackendError {
    BackendError::not_found("Route not found")
}
