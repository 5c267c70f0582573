/**
 * Client Configuration
 *
 * Where the anisync server lives, whether to talk to the mock endpoints, and
 * the form values remembered between runs.
 *
 * # Environment
 *
 * - `CLIENT_API_URL` - server URL (default `http://127.0.0.1:8080`)
 * - `CLIENT_USE_MOCK` - `1`/`true` targets `/api/mock/...`
 */
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError};

/// Default server URL
const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8080";

/// Application configuration wrapper.
#[derive(Debug, Clone)]
pub struct Config {
    app: AppConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app: AppConfig {
                server_url: Some(DEFAULT_SERVER_URL.to_string()),
                use_mock: false,
            },
        }
    }
}

impl Config {
    /// Load the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load the configuration from any variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let server_url = lookup("CLIENT_API_URL").unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());
        let use_mock = match lookup("CLIENT_USE_MOCK").as_deref().map(str::trim) {
            None | Some("") | Some("0") | Some("false") => false,
            Some("1") | Some("true") => true,
            Some(other) => {
                return Err(ConfigError::InvalidValue {
                    name: "CLIENT_USE_MOCK",
                    value: other.to_string(),
                })
            }
        };

        Self::with_builder(AppConfig::builder().server_url(server_url).use_mock(use_mock))
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        Ok(Self { app: builder.build()? })
    }

    /// Get the full URL for an endpoint resource, e.g. `check`
    pub fn api_url(&self, endpoint: &str) -> String {
        format!("{}{}/{}", self.server_url(), self.app.api_prefix(), endpoint)
    }

    pub fn server_url(&self) -> &str {
        self.app.server_url.as_deref().unwrap_or(DEFAULT_SERVER_URL)
    }

    pub fn use_mock(&self) -> bool {
        self.app.use_mock
    }
}

/// Failure to read or write the preferences file
#[derive(Debug, Error)]
pub enum PreferencesError {
    #[error("preferences I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid preferences file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("could not write preferences: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Form values remembered between runs
///
/// The MyAnimeList password is never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub kitsu_user_id: String,
    #[serde(default)]
    pub mal_username: String,
}

impl Preferences {
    /// `<config dir>/anisync/preferences.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("anisync").join("preferences.toml"))
    }

    /// Read preferences from `path`; a missing file gives the defaults
    pub fn load(path: &Path) -> Result<Self, PreferencesError> {
        match std::fs::read_to_string(path) {
            Ok(text) => Ok(toml::from_str(&text)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), PreferencesError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml::to_string(self)?)?;
        Ok(())
    }
}
