//! Application configuration module
//!
//! Provides the client-side configuration shared by the desktop app and the
//! integration tests: where the anisync server lives and which set of
//! endpoints (real or mock) to talk to.

use thiserror::Error;

/// Application configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Server URL, without trailing slash
    pub server_url: Option<String>,
    /// Use the `/api/mock/*` endpoints instead of the real ones
    pub use_mock: bool,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.server_url.as_deref() {
            Some(url) => validate_url(url),
            None => Ok(()),
        }
    }

    /// Path prefix of the endpoint resources, relative to the server URL
    pub fn api_prefix(&self) -> &'static str {
        if self.use_mock {
            "/api/mock"
        } else {
            "/api"
        }
    }
}

fn validate_url(url: &str) -> Result<(), ConfigError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(ConfigError::InvalidUrl(url.to_string()))
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    server_url: Option<String>,
    use_mock: bool,
}

impl AppConfigBuilder {
    /// Set the server URL
    pub fn server_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.server_url = Some(url.trim_end_matches('/').to_string());
        self
    }

    /// Target the mock endpoints
    pub fn use_mock(mut self, use_mock: bool) -> Self {
        self.use_mock = use_mock;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let config = AppConfig {
            server_url: self.server_url,
            use_mock: self.use_mock,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}
