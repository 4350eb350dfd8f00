// src/config/mod.rs
// Configuration resolution: CLI/env overrides > config file > defaults

pub mod env;
pub mod file;

pub use env::{Credentials, DotenvLoad, load_dotenv};
pub use file::FileConfig;

use std::time::Duration;
use thiserror::Error;

use crate::llm::http_client::{CONNECT_TIMEOUT, DEFAULT_TIMEOUT};
use crate::proxy::RetryPolicy;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid setting `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Gemini client settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiSettings {
    pub model: String,
    pub base_url: String,
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: GEMINI_API_BASE.to_string(),
            request_timeout: DEFAULT_TIMEOUT,
            connect_timeout: CONNECT_TIMEOUT,
        }
    }
}

/// Values supplied on the command line (or via clap's env fallback)
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub model: Option<String>,
    pub gemini_api_key: Option<String>,
}

/// Fully resolved runtime settings
#[derive(Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub gemini_api_key: Option<String>,
    pub gemini: GeminiSettings,
    pub retry: RetryPolicy,
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("gemini_api_key", &self.gemini_api_key.as_ref().map(|_| "<redacted>"))
            .field("gemini", &self.gemini)
            .field("retry", &self.retry)
            .finish()
    }
}

impl Settings {
    /// Merge overrides, the config file and environment credentials
    pub fn resolve(
        overrides: Overrides,
        file: FileConfig,
        credentials: Credentials,
    ) -> Result<Self, ConfigError> {
        let host = overrides
            .host
            .or(file.server.host)
            .unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = overrides.port.or(file.server.port).unwrap_or(DEFAULT_PORT);
        if port == 0 {
            return Err(ConfigError::Invalid {
                key: "server.port",
                reason: "must be non-zero".to_string(),
            });
        }

        let defaults = GeminiSettings::default();
        let gemini = GeminiSettings {
            model: overrides
                .model
                .or(file.gemini.model)
                .unwrap_or(defaults.model),
            base_url: file.gemini.base_url.unwrap_or(defaults.base_url),
            request_timeout: file
                .gemini
                .request_timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.request_timeout),
            connect_timeout: file
                .gemini
                .connect_timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.connect_timeout),
        };
        if gemini.model.trim().is_empty() {
            return Err(ConfigError::Invalid {
                key: "gemini.model",
                reason: "must not be empty".to_string(),
            });
        }

        let default_retry = RetryPolicy::default();
        let retry = RetryPolicy {
            max_attempts: file.retry.max_attempts.unwrap_or(default_retry.max_attempts),
            base_delay: file
                .retry
                .base_delay_ms
                .map(Duration::from_millis)
                .unwrap_or(default_retry.base_delay),
            factor: file.retry.factor.unwrap_or(default_retry.factor),
        };
        if retry.max_attempts == 0 {
            return Err(ConfigError::Invalid {
                key: "retry.max_attempts",
                reason: "must be at least 1".to_string(),
            });
        }
        if retry.factor == 0 {
            return Err(ConfigError::Invalid {
                key: "retry.factor",
                reason: "must be at least 1".to_string(),
            });
        }

        let gemini_api_key = overrides
            .gemini_api_key
            .filter(|k| !k.trim().is_empty())
            .or(credentials.gemini_api_key);

        Ok(Self {
            host,
            port,
            gemini_api_key,
            gemini,
            retry,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn has_credential(&self) -> bool {
        self.gemini_api_key.is_some()
    }
}
