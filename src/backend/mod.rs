//! Backend Module
//!
//! This module contains all server-side code for anisync: an Axum HTTP
//! server that compares a user's Kitsu library with their MyAnimeList list
//! and syncs the differences to MyAnimeList.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`handlers`** - Check, sync, verify and mock endpoint handlers
//! - **`error`** - Backend-specific error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── handlers/       - Endpoint handlers
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` holds the configuration and a `ResourceProvider`. No list data
//! is kept between requests: every `check` and `sync` fetches both lists anew.
//!
//! # Error Handling
//!
//! Handlers return `Result<Json<T>, BackendError>`. Errors are sent as JSON
//! `ErrorBody` values with the matching status code.

/// Server setup and configuration
#[cfg(feature = "ssr")]
pub mod server;

/// Route configuration
#[cfg(feature = "ssr")]
pub mod routes;

/// Endpoint handlers
#[cfg(feature = "ssr")]
pub mod handlers;

/// Backend error types
#[cfg(feature = "ssr")]
pub mod error;

/// Re-export commonly used types
#[cfg(feature = "ssr")]
pub use server::{create_app, AppState, ServerConfig};
#[cfg(feature = "ssr")]
pub use error::BackendError;
