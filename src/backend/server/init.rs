/**
 * Server Initialization
 *
 * This module creates the Axum application from a `ServerConfig`.
 *
 * # Initialization Process
 *
 * 1. Build the shared HTTP client for MyAnimeList and Kitsu
 * 2. Create the application state
 * 3. Create and configure the router
 */
use std::sync::Arc;

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::{AppState, HttpResourceProvider};

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails when the HTTP client cannot be built (e.g. no TLS backend).
pub fn create_app(config: ServerConfig) -> Result<Router<()>, reqwest::Error> {
    tracing::info!("Initializing anisync backend server");

    let provider = HttpResourceProvider::new(config.remote.clone())?;
    tracing::info!(
        "Using MyAnimeList at {} and Kitsu at {}",
        config.remote.mal_base_url,
        config.remote.kitsu_base_url
    );

    let app_state = AppState::new(config, Arc::new(provider));
    let app = create_router(app_state);

    tracing::info!("Router configured");
    Ok(app)
}
