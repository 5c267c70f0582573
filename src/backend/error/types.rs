/**
 * Backend Error Types
 *
 * This module defines error types specific to the backend server.
 * These errors are returned from HTTP handlers and are converted to JSON
 * `ErrorBody` responses.
 *
 * # Error Types
 *
 * - `HandlerError` - The request itself could not be served
 * - `RemoteError` - MyAnimeList or Kitsu failed while serving the request
 * - `SharedError` - Validation or conversion errors from the shared module
 *
 * Every variant carries a user-facing message and a cause. Remote errors also
 * carry a summary of the remote request when a response was received.
 */
use axum::http::StatusCode;
use thiserror::Error;

use crate::remote::RemoteError;
use crate::shared::api::ErrorBody;
use crate::shared::SharedError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use anisync::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::handler(StatusCode::BAD_REQUEST, "Sync: Could not decode request.", "EOF");
/// assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error (e.g. undecodable body, unknown mock account)
    #[error("{status} {message}: {cause}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
        /// What went wrong underneath
        cause: String,
    },

    /// A remote service call failed
    #[error("{status} {message}: {source}")]
    RemoteError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
        /// The failed remote call
        #[source]
        source: RemoteError,
    },

    /// Shared error (from shared module)
    #[error(transparent)]
    SharedError(#[from] SharedError),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>, cause: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
            cause: cause.into(),
        }
    }

    /// Create a new remote error with a status code
    pub fn remote(status: StatusCode, message: impl Into<String>, source: RemoteError) -> Self {
        Self::RemoteError {
            status,
            message: message.into(),
            source,
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` / `RemoteError` - Uses the status code from the error
    /// - `SharedError::ValidationError` - 400 Bad Request
    /// - Other `SharedError` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } | Self::RemoteError { status, .. } => *status,
            Self::SharedError(SharedError::ValidationError { .. }) => StatusCode::BAD_REQUEST,
            Self::SharedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the user-facing error message
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } | Self::RemoteError { message, .. } => message.clone(),
            Self::SharedError(SharedError::ValidationError { message, .. }) => message.clone(),
            Self::SharedError(err) => err.to_string(),
        }
    }

    /// Get the underlying cause
    pub fn cause(&self) -> String {
        match self {
            Self::HandlerError { cause, .. } => cause.clone(),
            Self::RemoteError { source, .. } => source.to_string(),
            Self::SharedError(err) => err.to_string(),
        }
    }

    /// JSON body sent to the client
    pub fn to_body(&self) -> ErrorBody {
        let remote_response = match self {
            Self::RemoteError { source, .. } => source.remote_response(),
            _ => None,
        };
        ErrorBody {
            message: self.message(),
            cause: self.cause(),
            status_code: self.status_code().as_u16(),
            remote_response,
        }
    }
}
