//! anisync - Main Library
//!
//! anisync keeps a MyAnimeList anime list in step with a Kitsu library. It
//! fetches both lists, compares them by MyAnimeList anime ID, adds the
//! missing entries and updates the stale ones on MyAnimeList.
//!
//! # Module Structure
//!
//! - **`shared`** - Types shared between server, desktop app and tool
//!   - Anime list model, list comparison, sync results
//!   - JSON wire types and status translation
//!   - Error types, client configuration
//!
//! - **`remote`** - Clients for the external list services
//!   - MyAnimeList XML API, Kitsu JSON:API
//!   - `SyncClient`: compare and sync service
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server with `check`, `sync` and `mal-verify` endpoints
//!   - Mock endpoints with canned fixtures
//!   - Static file serving for the web UI
//!
//! - **`egui_app`** - Native desktop app (egui/eframe)
//!
//! # Feature Flags
//!
//! - **`ssr`** - Enables the backend module and the `anisync-server` binary
//!
//! # Binaries
//!
//! - `anisync-server` - HTTP server
//! - `anisync_app` - desktop client talking to the server
//! - `anisync-tool` - command-line sync that talks to the services directly
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use anisync::remote::{HttpResources, RemoteConfig, SyncClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = RemoteConfig::default();
//! let resources = HttpResources::new(config.http_client()?, &config, None);
//! let client = SyncClient::new(Arc::new(resources));
//!
//! let diff = client.diff("mal_user", "12345").await?;
//! println!("{} missing", diff.missing.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::error::SharedError` for validation and conversion
//! - `remote::RemoteError` for calls to MyAnimeList and Kitsu
//! - `backend::error::BackendError` for HTTP handler errors

/// Shared types and data structures
pub mod shared;

/// MyAnimeList and Kitsu clients
pub mod remote;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;

/// egui native desktop app
/// Only compiled for native targets (not WASM)
#[cfg(not(target_arch = "wasm32"))]
pub mod egui_app;
