//! egui Native Desktop App Module
//!
//! A native desktop client for the anisync server built with egui/eframe.
//!
//! # Architecture
//!
//! - **`config`** - Server URL, mock switch and remembered form values
//! - **`api`** - Blocking calls to the `check`, `sync` and `mal-verify` endpoints
//! - **`state`** - `AppState`: form state, worker threads and the current status
//! - **`types`** - Worker results and password verification state
//! - **`views`** - Top bar, form, status banner, results and activity log
//! - **`theme`** - Colors and frame styles
//! - **`debug`** - In-memory activity log
//!
//! # Module Structure
//!
//! ```text
//! egui_app/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Main application entry point
//! ├── config.rs       - Configuration and preferences
//! ├── api.rs          - Endpoint resources
//! ├── types.rs        - Shared types
//! ├── state/          - Controller
//! ├── views/          - egui views
//! ├── theme/          - Colors and styles
//! └── debug.rs        - Activity log
//! ```
//!
//! # Example
//!
//! ```text
//! CLIENT_API_URL=http://127.0.0.1:8080 cargo run --bin anisync_app
//! ```

pub mod api;
pub mod config;
pub mod debug;
pub mod state;
pub mod theme;
pub mod types;
pub mod views;

// Re-export commonly used types
pub use api::{AnisyncApi, ApiError};
pub use config::{Config, Preferences};
pub use debug::{DebugCategory, DebugLevel, DebugLogger};
pub use state::AppState;
pub use types::{PasswordState, WorkerResult};
