//! Remote Module
//!
//! Clients for the two external list services and the sync service built on
//! top of them.
//!
//! # Architecture
//!
//! - **`mal`** - MyAnimeList XML API client (`MalClient`)
//! - **`kitsu`** - Kitsu JSON:API client (`KitsuClient`)
//! - **`client`** - `SyncClient`, which fetches, compares and syncs lists
//!
//! Everything the sync service needs from the outside world goes through the
//! `MalApi` and `KitsuApi` traits. `HttpResources` implements both over
//! `reqwest`; tests substitute their own implementation.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use anisync::remote::{HttpResources, RemoteConfig, SyncClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = RemoteConfig::default();
//! let resources = HttpResources::new(config.http_client()?, &config, None);
//! let client = SyncClient::new(Arc::new(resources));
//! let diff = client.diff("mal-user", "12345").await?;
//! println!("{} missing", diff.missing.len());
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use async_trait::async_trait;
use reqwest::RequestBuilder;
use thiserror::Error;

use crate::shared::anime::Anime;
use crate::shared::api::{RemoteRequest, RemoteResponse};
use crate::shared::error::SharedError;

/// MyAnimeList XML API client
pub mod mal;

/// Kitsu JSON:API client
pub mod kitsu;

/// Sync service
pub mod client;

pub use client::{DiffError, SyncClient};
pub use kitsu::KitsuClient;
pub use mal::{MalClient, MalEntry};

pub const DEFAULT_MAL_BASE_URL: &str = "https://myanimelist.net/";
pub const DEFAULT_KITSU_BASE_URL: &str = "https://kitsu.io/";
pub const DEFAULT_MAL_USER_AGENT: &str = concat!("anisync/", env!("CARGO_PKG_VERSION"));

/// Errors from calls to MyAnimeList or Kitsu
#[derive(Debug, Error)]
pub enum RemoteError {
    /// No response was received
    #[error("{} {}: {message}", .request.method, .request.url)]
    Transport {
        request: RemoteRequest,
        message: String,
    },

    /// The service answered with a non-2xx status
    #[error("{} {}: {status} {body}", .request.method, .request.url)]
    Status {
        status: u16,
        request: RemoteRequest,
        body: String,
    },

    /// The response body could not be understood
    #[error("{} {}: {message}", .request.method, .request.url)]
    Decode {
        status: u16,
        request: RemoteRequest,
        message: String,
    },

    /// A list entry could not be converted
    #[error(transparent)]
    Conversion(#[from] SharedError),
}

impl RemoteError {
    /// Summary of the remote exchange, when a response was received
    pub fn remote_response(&self) -> Option<RemoteResponse> {
        match self {
            RemoteError::Status { status, request, .. }
            | RemoteError::Decode { status, request, .. } => Some(RemoteResponse {
                status_code: *status,
                request: request.clone(),
            }),
            RemoteError::Transport { .. } | RemoteError::Conversion(_) => None,
        }
    }

    /// HTTP status of the remote response, if any
    pub fn status(&self) -> Option<u16> {
        self.remote_response().map(|r| r.status_code)
    }
}

/// MyAnimeList username and password, sent as basic auth
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Operations needed from MyAnimeList
#[async_trait]
pub trait MalApi: Send + Sync {
    /// Succeeds when MyAnimeList accepts the username and password
    async fn verify_credentials(&self, username: &str, password: &str) -> Result<(), RemoteError>;

    /// A user's anime list; entries that cannot be converted are skipped
    async fn anime_list(&self, username: &str) -> Result<Vec<Anime>, RemoteError>;

    async fn add_entry(&self, id: u64, entry: &MalEntry) -> Result<(), RemoteError>;

    async fn update_entry(&self, id: u64, entry: &MalEntry) -> Result<(), RemoteError>;
}

/// Operations needed from Kitsu
#[async_trait]
pub trait KitsuApi: Send + Sync {
    /// Every anime library entry of a user
    async fn library(&self, user_id: &str) -> Result<Vec<Anime>, RemoteError>;
}

/// Everything the sync service needs from the outside world
pub trait Resources: MalApi + KitsuApi {}

impl<T: MalApi + KitsuApi> Resources for T {}

/// Where the remote services live and how to reach them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteConfig {
    pub mal_base_url: String,
    pub kitsu_base_url: String,
    pub mal_user_agent: String,
    pub timeout: Duration,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            mal_base_url: DEFAULT_MAL_BASE_URL.to_string(),
            kitsu_base_url: DEFAULT_KITSU_BASE_URL.to_string(),
            mal_user_agent: DEFAULT_MAL_USER_AGENT.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl RemoteConfig {
    /// Build the shared HTTP client
    pub fn http_client(&self) -> Result<reqwest::Client, reqwest::Error> {
        reqwest::Client::builder().timeout(self.timeout).build()
    }
}

/// `MalClient` and `KitsuClient` together
#[derive(Debug, Clone)]
pub struct HttpResources {
    pub mal: MalClient,
    pub kitsu: KitsuClient,
}

impl HttpResources {
    /// Both clients over one HTTP client; `credentials` authorize MAL writes
    pub fn new(http: reqwest::Client, config: &RemoteConfig, credentials: Option<Credentials>) -> Self {
        let mut mal = MalClient::new(http.clone(), &config.mal_base_url, &config.mal_user_agent);
        if let Some(credentials) = credentials {
            mal = mal.with_credentials(credentials);
        }
        Self {
            mal,
            kitsu: KitsuClient::new(http, &config.kitsu_base_url),
        }
    }
}

#[async_trait]
impl MalApi for HttpResources {
    async fn verify_credentials(&self, username: &str, password: &str) -> Result<(), RemoteError> {
        self.mal.verify_credentials(username, password).await
    }

    async fn anime_list(&self, username: &str) -> Result<Vec<Anime>, RemoteError> {
        self.mal.anime_list(username).await
    }

    async fn add_entry(&self, id: u64, entry: &MalEntry) -> Result<(), RemoteError> {
        self.mal.add_entry(id, entry).await
    }

    async fn update_entry(&self, id: u64, entry: &MalEntry) -> Result<(), RemoteError> {
        self.mal.update_entry(id, entry).await
    }
}

#[async_trait]
impl KitsuApi for HttpResources {
    async fn library(&self, user_id: &str) -> Result<Vec<Anime>, RemoteError> {
        self.kitsu.library(user_id).await
    }
}

/// Join a base URL and a relative path
pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Send a request and return the body of a 2xx response
pub(crate) async fn send(builder: RequestBuilder) -> Result<(u16, RemoteRequest, String), RemoteError> {
    let (client, request) = builder.build_split();
    let request = request.map_err(|e| RemoteError::Transport {
        request: RemoteRequest::default(),
        message: e.to_string(),
    })?;
    let summary = RemoteRequest {
        method: request.method().to_string(),
        url: request.url().to_string(),
    };

    tracing::debug!("{} {}", summary.method, summary.url);

    let response = client
        .execute(request)
        .await
        .map_err(|e| RemoteError::Transport {
            request: summary.clone(),
            message: e.to_string(),
        })?;

    let status = response.status().as_u16();
    let body = response.text().await.map_err(|e| RemoteError::Decode {
        status,
        request: summary.clone(),
        message: e.to_string(),
    })?;

    if !(200..300).contains(&status) {
        tracing::debug!("{} {} returned {}", summary.method, summary.url, status);
        return Err(RemoteError::Status {
            status,
            request: summary,
            body: body.trim().to_string(),
        });
    }

    Ok((status, summary, body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("https://kitsu.io/", "/api/edge"), "https://kitsu.io/api/edge");
        assert_eq!(join_url("http://127.0.0.1:9000", "malappinfo.php"), "http://127.0.0.1:9000/malappinfo.php");
    }

    #[test]
    fn test_remote_response_only_with_a_response() {
        let request = RemoteRequest {
            method: "GET".into(),
            url: "https://kitsu.io/api/edge/library-entries".into(),
        };
        let status = RemoteError::Status {
            status: 404,
            request: request.clone(),
            body: "Not Found".into(),
        };
        assert_eq!(status.status(), Some(404));
        assert_eq!(status.remote_response().map(|r| r.request), Some(request.clone()));

        let transport = RemoteError::Transport {
            request,
            message: "connection refused".into(),
        };
        assert!(transport.remote_response().is_none());
    }
}
