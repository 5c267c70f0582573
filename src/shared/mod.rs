//! Shared Module
//!
//! This module contains types and data structures that are shared between
//! the server, the desktop client and the command line tool. These types are
//! used for serialization over the anisync HTTP API and for the list
//! comparison itself.
//!
//! # Overview
//!
//! The shared module provides platform-agnostic types that can be used
//! in both server and client code. Nothing in here performs I/O.

/// Anime list entries and watch statuses
pub mod anime;

/// List comparison
pub mod compare;

/// Sync outcome types
pub mod sync;

/// Request and response bodies of the HTTP API
pub mod api;

/// Status messages derived from responses
pub mod status;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use anime::{Anime, WatchStatus};
pub use compare::{compare, AniDiff, Diff, FieldChange, FieldDiff};
pub use sync::{Fail, SyncResult};
pub use api::{ApiError, CheckQuery, CheckResponse, ErrorBody, SyncRequest, SyncResponse};
pub use status::{check_status, error_status, sync_status, StatusView, Theme};
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
