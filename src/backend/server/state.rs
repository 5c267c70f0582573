/**
 * Application State Management
 *
 * This module defines the application state shared by all handlers and the
 * `FromRef` implementations for Axum state extraction.
 *
 * # Resources
 *
 * Handlers never build HTTP clients themselves. They ask the state's
 * `ResourceProvider` for a `Resources` implementation, optionally carrying
 * MyAnimeList credentials for the request. The server uses
 * `HttpResourceProvider`; tests inject their own provider.
 *
 * # Example
 *
 * ```rust,no_run
 * use anisync::backend::server::state::AppState;
 * use axum::extract::State;
 *
 * async fn handler(State(state): State<AppState>) {
 *     let client = state.sync_client(None);
 *     // ...
 * }
 * ```
 */
use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::server::config::ServerConfig;
use crate::remote::{Credentials, HttpResources, RemoteConfig, Resources, SyncClient};

/// Source of remote resources for a request
pub trait ResourceProvider: Send + Sync {
    /// Resources for one request; `credentials` authorize MyAnimeList writes
    fn resources(&self, credentials: Option<Credentials>) -> Arc<dyn Resources>;
}

/// Provider backed by real MyAnimeList and Kitsu clients
///
/// One `reqwest::Client` is shared by all requests.
#[derive(Debug, Clone)]
pub struct HttpResourceProvider {
    http: reqwest::Client,
    remote: RemoteConfig,
}

impl HttpResourceProvider {
    pub fn new(remote: RemoteConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            http: remote.http_client()?,
            remote,
        })
    }
}

impl ResourceProvider for HttpResourceProvider {
    fn resources(&self, credentials: Option<Credentials>) -> Arc<dyn Resources> {
        Arc::new(HttpResources::new(self.http.clone(), &self.remote, credentials))
    }
}

/// Application state
///
/// # Fields
///
/// * `config` - Server configuration
/// * `provider` - Source of MyAnimeList and Kitsu clients
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub provider: Arc<dyn ResourceProvider>,
}

impl AppState {
    pub fn new(config: ServerConfig, provider: Arc<dyn ResourceProvider>) -> Self {
        Self {
            config: Arc::new(config),
            provider,
        }
    }

    /// A sync service for one request
    pub fn sync_client(&self, credentials: Option<Credentials>) -> SyncClient {
        SyncClient::new(self.provider.resources(credentials))
    }
}

/// Implement FromRef for the resource provider
///
/// This allows handlers to extract `Arc<dyn ResourceProvider>` directly
/// from `AppState` using `State(Arc<dyn ResourceProvider>)`.
impl FromRef<AppState> for Arc<dyn ResourceProvider> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.provider.clone()
    }
}
