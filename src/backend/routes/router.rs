/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. API routes (`/api/...`)
 * 2. Mock API routes (`/api/mock/...`)
 * 3. Static files under `/static`
 * 4. Fallback: the assets directory, which answers 404 for unknown paths
 *
 * Every request is logged with its method, URI, status and latency.
 */
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::backend::routes::api_routes::{configure_api_routes, configure_mock_routes};
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state (configuration and resource provider)
pub fn create_router(app_state: AppState) -> Router<()> {
    let assets_dir = app_state.config.assets_dir.clone();

    let router = Router::new();

    // Add API routes
    let router = configure_api_routes(router);
    let router = configure_mock_routes(router);

    // Static files, then everything else from the same directory
    let router = router
        .nest_service("/static", ServeDir::new(&assets_dir))
        .fallback_service(ServeDir::new(&assets_dir));

    router
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
