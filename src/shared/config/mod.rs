//! Client configuration module
//!
//! Where the client library finds the server and how long the editor waits
//! after the last keystroke before saving.

use std::time::Duration;

use thiserror::Error;

/// Server used when nothing else is configured
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000";

/// Quiet period before an autosave fires
pub const DEFAULT_AUTOSAVE_DELAY: Duration = Duration::from_millis(1000);

/// Environment variable overriding the server URL
pub const SERVER_URL_ENV: &str = "CLOUDPAD_SERVER_URL";

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the CloudPad server, without a trailing slash
    pub server_url: String,
    /// Debounce window for autosave
    pub autosave_delay: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            autosave_delay: DEFAULT_AUTOSAVE_DELAY,
        }
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Defaults, with the server URL taken from `CLOUDPAD_SERVER_URL` when set
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut builder = Self::builder();
        if let Ok(url) = std::env::var(SERVER_URL_ENV) {
            builder = builder.server_url(url);
        }
        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.server_url.starts_with("http://") || self.server_url.starts_with("https://")) {
            return Err(ConfigError::InvalidUrl(self.server_url.clone()));
        }
        if self.autosave_delay.is_zero() {
            return Err(ConfigError::InvalidDelay);
        }
        Ok(())
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    server_url: Option<String>,
    autosave_delay: Option<Duration>,
}

impl AppConfigBuilder {
    /// Set the server URL
    pub fn server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = Some(url.into());
        self
    }

    /// Set the autosave debounce window
    pub fn autosave_delay(mut self, delay: Duration) -> Self {
        self.autosave_delay = Some(delay);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let server_url = self
            .server_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());

        let config = AppConfig {
            server_url,
            autosave_delay: self.autosave_delay.unwrap_or(DEFAULT_AUTOSAVE_DELAY),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("autosave delay must be greater than zero")]
    InvalidDelay,
}
