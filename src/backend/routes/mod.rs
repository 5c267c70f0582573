//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Architecture
//!
//! - **`router`** - Main router creation and route assembly
//! - **`api_routes`** - Real and mock API endpoints
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use anisync::backend::routes::create_router;
//! use anisync::backend::server::{AppState, HttpResourceProvider, ServerConfig};
//!
//! # fn example() -> Result<(), reqwest::Error> {
//! let config = ServerConfig::default();
//! let provider = HttpResourceProvider::new(config.remote.clone())?;
//! let router = create_router(AppState::new(config, Arc::new(provider)));
//! # Ok(())
//! # }
//! ```

/// Main router creation
pub mod router;

/// API endpoint routes
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
