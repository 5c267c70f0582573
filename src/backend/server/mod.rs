//! Server Module
//!
//! This module contains the code for initializing and configuring the Axum
//! HTTP server.
//!
//! # Architecture
//!
//! - **`state`** - `AppState`, the resource provider seam and `FromRef` impls
//! - **`config`** - Configuration loading from the environment
//! - **`init`** - App creation
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and ResourceProvider
//! ├── config.rs       - ServerConfig loading
//! └── init.rs         - Server initialization and app creation
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use anisync::backend::server::{create_app, ServerConfig};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let app = create_app(ServerConfig::from_env()?)?;
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::ServerConfig;
pub use init::create_app;
pub use state::{AppState, HttpResourceProvider, ResourceProvider};
