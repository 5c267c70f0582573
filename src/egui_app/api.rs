/**
 * Endpoint Resources
 *
 * Blocking HTTP calls to the anisync server's `check`, `sync` and
 * `mal-verify` endpoints. Each call runs on its own tokio runtime so it can be
 * made from a plain worker thread spawned by the UI.
 */
use reqwest::Client;
use serde::de::DeserializeOwned;
use tokio::runtime::Runtime;

use crate::egui_app::config::Config;
use crate::shared::api::{CheckQuery, CheckResponse, SyncRequest, SyncResponse, VerifyRequest, VerifyResponse};

pub use crate::shared::api::ApiError;

/// Client for the anisync server
#[derive(Debug, Clone)]
pub struct AnisyncApi {
    config: Config,
    client: Client,
}

impl AnisyncApi {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// `GET check?kitsuUserID=..&malUsername=..`
    pub fn check(&self, query: &CheckQuery) -> Result<CheckResponse, ApiError> {
        let url = self.config.api_url("check");
        let request = self.client.get(&url).query(query);
        block_on(async move { read_json(request.send().await).await })
    }

    /// `POST sync` with the credentials as JSON
    pub fn sync(&self, body: &SyncRequest) -> Result<SyncResponse, ApiError> {
        let url = self.config.api_url("sync");
        let request = self.client.post(&url).json(body);
        block_on(async move { read_json(request.send().await).await })
    }

    /// `POST mal-verify`
    pub fn verify(&self, body: &VerifyRequest) -> Result<VerifyResponse, ApiError> {
        let url = self.config.api_url("mal-verify");
        let request = self.client.post(&url).json(body);
        block_on(async move { read_json(request.send().await).await })
    }
}

fn block_on<T>(future: impl std::future::Future<Output = Result<T, ApiError>>) -> Result<T, ApiError> {
    let rt = Runtime::new().map_err(|e| ApiError::Network(format!("Failed to create runtime: {}", e)))?;
    rt.block_on(future)
}

async fn read_json<T: DeserializeOwned>(
    response: Result<reqwest::Response, reqwest::Error>,
) -> Result<T, ApiError> {
    let response = response.map_err(|e| ApiError::Network(format!("Network error: {}", e)))?;
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        if body.trim().is_empty() {
            let reason = status.canonical_reason().unwrap_or("Unknown error");
            return Err(ApiError::from_response(status.as_u16(), reason));
        }
        return Err(ApiError::from_response(status.as_u16(), &body));
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Network(format!("Failed to parse response: {}", e)))
}
