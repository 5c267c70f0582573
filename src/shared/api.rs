/**
 * API Wire Types
 *
 * Request and response bodies of the anisync HTTP endpoints. The server
 * produces them and the desktop client consumes them, so both sides share
 * these definitions.
 *
 * # Endpoints
 *
 * - `GET  {prefix}/check?kitsuUserID=..&malUsername=..` -> `CheckResponse`
 * - `POST {prefix}/sync` with `SyncRequest` -> `SyncResponse`
 * - `POST {prefix}/mal-verify` with `VerifyRequest` -> `VerifyResponse`
 *
 * Errors are returned as `ErrorBody` with a non-2xx status.
 */
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shared::compare::Diff;
use crate::shared::error::SharedError;
use crate::shared::sync::SyncResult;

/// Query parameters of `GET check`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckQuery {
    #[serde(rename = "kitsuUserID", default)]
    pub kitsu_user_id: String,
    #[serde(rename = "malUsername", default)]
    pub mal_username: String,
}

impl CheckQuery {
    pub fn new(kitsu_user_id: impl Into<String>, mal_username: impl Into<String>) -> Self {
        Self {
            kitsu_user_id: kitsu_user_id.into(),
            mal_username: mal_username.into(),
        }
    }

    pub fn validate(&self) -> Result<(), SharedError> {
        if self.kitsu_user_id.trim().is_empty() {
            return Err(SharedError::validation("kitsuUserID", "Kitsu user ID is required"));
        }
        if self.mal_username.trim().is_empty() {
            return Err(SharedError::validation("malUsername", "MyAnimeList username is required"));
        }
        Ok(())
    }
}

/// JSON body of `POST sync`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncRequest {
    #[serde(rename = "kitsuUserID", default)]
    pub kitsu_user_id: String,
    #[serde(rename = "malUsername", default)]
    pub mal_username: String,
    #[serde(rename = "malPassword", default)]
    pub mal_password: String,
}

impl SyncRequest {
    pub fn validate(&self) -> Result<(), SharedError> {
        CheckQuery::new(self.kitsu_user_id.clone(), self.mal_username.clone()).validate()?;
        if self.mal_password.is_empty() {
            return Err(SharedError::validation("malPassword", "MyAnimeList password is required"));
        }
        Ok(())
    }
}

/// JSON body of `POST mal-verify`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyRequest {
    #[serde(rename = "malUsername", default)]
    pub mal_username: String,
    #[serde(rename = "malPassword", default)]
    pub mal_password: String,
}

/// Result of a credential check
///
/// `value` echoes the username, since only one value can be returned for the
/// two that were sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyResponse {
    #[serde(rename = "isValid")]
    pub is_valid: bool,
    #[serde(default)]
    pub value: String,
}

/// Response of `GET check`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckResponse {
    #[serde(rename = "MalUsername", default)]
    pub mal_username: String,
    #[serde(flatten)]
    pub diff: Diff,
}

/// Response of `POST sync`; `diff` is recomputed after syncing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SyncResponse {
    #[serde(rename = "MalUsername", default)]
    pub mal_username: String,
    #[serde(rename = "Sync", default)]
    pub sync: SyncResult,
    #[serde(flatten)]
    pub diff: Diff,
}

/// Error body returned with every non-2xx response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(rename = "Message")]
    pub message: String,
    #[serde(rename = "Cause", default)]
    pub cause: String,
    #[serde(rename = "StatusCode")]
    pub status_code: u16,
    #[serde(rename = "RemoteResponse", default, skip_serializing_if = "Option::is_none")]
    pub remote_response: Option<RemoteResponse>,
}

/// Summary of the remote call that failed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteResponse {
    #[serde(rename = "StatusCode")]
    pub status_code: u16,
    #[serde(rename = "Request")]
    pub request: RemoteRequest,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteRequest {
    #[serde(rename = "Method")]
    pub method: String,
    #[serde(rename = "URL")]
    pub url: String,
}

impl ErrorBody {
    /// Text shown to the user: the message, followed by the cause when known
    pub fn describe(&self) -> String {
        if self.cause.is_empty() {
            self.message.clone()
        } else {
            format!("{} ({})", self.message, self.cause)
        }
    }
}

/// Failure of a call to the anisync server, as seen by a client
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The server answered with a non-2xx status
    #[error("{status} {message}")]
    Http { status: u16, message: String },

    /// The server could not be reached or the response could not be read
    #[error("{0}")]
    Network(String),
}

impl ApiError {
    /// Build an `Http` error from a status and raw response body
    ///
    /// The message comes from the JSON `ErrorBody` when the body is one,
    /// otherwise the trimmed body text is used as is.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = match serde_json::from_str::<ErrorBody>(body) {
            Ok(error) => error.describe(),
            Err(_) => body.trim().to_string(),
        };
        ApiError::Http { status, message }
    }
}
