/**
 * Server Configuration
 *
 * This module loads the server configuration from environment variables,
 * with defaults suitable for local development.
 *
 * # Variables
 *
 * | Variable            | Default                     |
 * |---------------------|-----------------------------|
 * | `SERVER_PORT`       | `8080`                      |
 * | `ASSETS_DIR`        | `ui`                        |
 * | `MAL_BASE_URL`      | `https://myanimelist.net/`  |
 * | `KITSU_BASE_URL`    | `https://kitsu.io/`         |
 * | `MAL_USER_AGENT`    | `anisync/<version>`         |
 * | `HTTP_TIMEOUT_SECS` | `30`                        |
 *
 * A `.env` file is honoured by the server binary through `dotenv`.
 */
use std::path::PathBuf;
use std::time::Duration;

use crate::remote::RemoteConfig;
use crate::shared::config::ConfigError;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_ASSETS_DIR: &str = "ui";

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Port to listen on (all interfaces)
    pub port: u16,
    /// Directory served at `/` and `/static`
    pub assets_dir: PathBuf,
    /// Remote service locations and HTTP settings
    pub remote: RemoteConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            remote: RemoteConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load the configuration from any variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(port) = get("SERVER_PORT") {
            config.port = port.trim().parse().map_err(|_| ConfigError::InvalidValue {
                name: "SERVER_PORT",
                value: port.clone(),
            })?;
        }
        if let Some(dir) = get("ASSETS_DIR") {
            config.assets_dir = PathBuf::from(dir);
        }
        if let Some(url) = get("MAL_BASE_URL") {
            config.remote.mal_base_url = validate_url(url)?;
        }
        if let Some(url) = get("KITSU_BASE_URL") {
            config.remote.kitsu_base_url = validate_url(url)?;
        }
        if let Some(agent) = get("MAL_USER_AGENT") {
            config.remote.mal_user_agent = agent;
        }
        if let Some(secs) = get("HTTP_TIMEOUT_SECS") {
            let secs: u64 = secs.trim().parse().map_err(|_| ConfigError::InvalidValue {
                name: "HTTP_TIMEOUT_SECS",
                value: secs.clone(),
            })?;
            config.remote.timeout = Duration::from_secs(secs);
        }

        tracing::debug!("Loaded server configuration: {:?}", config);
        Ok(config)
    }
}

fn validate_url(url: String) -> Result<String, ConfigError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(url)
    } else {
        Err(ConfigError::InvalidUrl(url))
    }
}
