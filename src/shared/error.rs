//! Shared Error Types
//!
//! This module defines error types that are shared between the server, the
//! desktop client and the command line tool. These errors represent failures
//! that can happen while converting or validating list data, independently of
//! where the data came from.
//!
//! # Error Categories
//!
//! - `SerializationError` - JSON/XML serialization or deserialization failures
//! - `ValidationError` - Form or request validation failures
//! - `ConversionError` - A remote list entry could not be turned into an `Anime`
//!
//! # Usage
//!
//! ```rust
//! use anisync::shared::error::SharedError;
//!
//! let error = SharedError::validation("malUsername", "MyAnimeList username is required");
//! ```
use thiserror::Error;

/// Shared error types that can occur in every part of the application
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// JSON or XML serialization or deserialization error
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Human-readable error message
        message: String,
    },

    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// A list entry could not be converted
    #[error("Conversion error: {message}")]
    ConversionError {
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new conversion error
    pub fn conversion(message: impl Into<String>) -> Self {
        Self::ConversionError {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}
