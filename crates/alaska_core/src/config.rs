//! Client configuration.
//!
//! Passed explicitly to [`AlaskaClient`](crate::AlaskaClient) so several
//! service instances can be exercised from one process.

use crate::error::{AlaskaError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Environment variable that overrides `service.base_url`.
pub const BASE_URL_ENV: &str = "ALASKA_BASE_URL";

/// Default service root observed for the Alaska container.
pub const DEFAULT_BASE_URL: &str = "http://0.0.0.0:8091";

/// Complete client configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Where the service lives.
    #[serde(default)]
    pub service: ServiceConfig,

    /// HTTP transport tuning.
    #[serde(default)]
    pub transport: TransportConfig,

    /// Readiness wait loop.
    #[serde(default)]
    pub readiness: ReadinessConfig,
}

impl Config {
    /// Load configuration from a TOML file. A missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)
                .map_err(|e| AlaskaError::ConfigError(format!("failed to read config: {}", e)))?;
            Self::from_toml_str(&content)
        } else {
            Ok(Config::default())
        }
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| AlaskaError::ConfigError(format!("failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| AlaskaError::ConfigError(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)
            .map_err(|e| AlaskaError::ConfigError(format!("failed to write config: {}", e)))?;
        Ok(())
    }

    /// Replace the service root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.service.base_url = base_url.into();
        self
    }

    /// Apply `ALASKA_BASE_URL` if it is set and non-empty.
    pub fn apply_env(self) -> Self {
        match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => self.with_base_url(url.trim()),
            _ => self,
        }
    }

    /// Reject base URLs that cannot address an HTTP service and readiness
    /// timeouts that do not fit in a `Duration`.
    pub fn validate(&self) -> Result<()> {
        let url = &self.service.base_url;
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(AlaskaError::ConfigError(format!(
                "base_url must start with http:// or https://, got {:?}",
                url
            )));
        }
        self.readiness.validate()
    }

    /// `{base_url}/{info_path}`
    pub fn info_url(&self) -> String {
        self.service.join(&self.service.info_path)
    }

    /// `{base_url}/{bear_path}`
    pub fn bear_url(&self) -> String {
        self.service.join(&self.service.bear_path)
    }

    /// `{base_url}/{bear_path}/{id}`
    pub fn bear_item_url(&self, bear_id: u64) -> String {
        format!("{}/{}", self.bear_url(), bear_id)
    }
}

/// Service location.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Service root, e.g. `http://0.0.0.0:8091`.
    pub base_url: String,

    /// Path of the info endpoint (default: `info`).
    pub info_path: String,

    /// Path of the bear collection (default: `bear`).
    pub bear_path: String,
}

impl ServiceConfig {
    fn join(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_matches('/')
        )
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            info_path: "info".to_string(),
            bear_path: "bear".to_string(),
        }
    }
}

/// HTTP transport settings. Unset values keep the transport defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TransportConfig {
    /// Whole-request timeout in seconds.
    pub timeout_secs: Option<u64>,

    /// Connect timeout in seconds.
    pub connect_timeout_secs: Option<u64>,
}

impl TransportConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout_secs.map(Duration::from_secs)
    }
}

/// Readiness wait loop settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadinessConfig {
    /// Give up after this many seconds (default: 10.0).
    pub timeout_secs: f64,

    /// Pause between probes in milliseconds (default: 100).
    pub pause_ms: u64,
}

impl ReadinessConfig {
    /// Reject NaN, infinite and negative values, and anything too large
    /// for a `Duration`.
    pub fn validate(&self) -> Result<()> {
        Duration::try_from_secs_f64(self.timeout_secs)
            .map(|_| ())
            .map_err(|e| {
                AlaskaError::ConfigError(format!(
                    "readiness timeout_secs must be finite and non-negative, got {}: {}",
                    self.timeout_secs, e
                ))
            })
    }

    /// Wait budget. Values that failed validation collapse to zero.
    pub fn timeout(&self) -> Duration {
        Duration::try_from_secs_f64(self.timeout_secs).unwrap_or(Duration::ZERO)
    }

    pub fn pause(&self) -> Duration {
        Duration::from_millis(self.pause_ms)
    }
}

impl Default for ReadinessConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10.0,
            pause_ms: 100,
        }
    }
}
