// src/config/file.rs
// File-based configuration from ~/.resolve/config.toml

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Top-level config structure. Every field is optional; absent values fall
/// through to defaults during resolution.
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(default)]
pub struct FileConfig {
    pub server: ServerSection,
    pub gemini: GeminiSection,
    pub retry: RetrySection,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(default)]
pub struct ServerSection {
    pub host: Option<String>,
    pub port: Option<u16>,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(default)]
pub struct GeminiSection {
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub request_timeout_secs: Option<u64>,
    pub connect_timeout_secs: Option<u64>,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(default)]
pub struct RetrySection {
    pub max_attempts: Option<u32>,
    pub base_delay_ms: Option<u64>,
    pub factor: Option<u32>,
}

impl FileConfig {
    /// Load config from `path`, or from ~/.resolve/config.toml when no path is given.
    /// Missing or unparsable files yield defaults.
    pub fn load(path: Option<&Path>) -> Self {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::default_path);

        match std::fs::read_to_string(&path) {
            Ok(contents) => match Self::parse(&contents) {
                Ok(config) => {
                    debug!(path = %path.display(), "Loaded config from file");
                    config
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Failed to parse config file");
                    Self::default()
                }
            },
            Err(_) => {
                debug!(path = %path.display(), "Config file not found, using defaults");
                Self::default()
            }
        }
    }

    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Get the default config file path
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".resolve")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_full() {
        let config = FileConfig::parse(
            r#"
            [server]
            host = "127.0.0.1"
            port = 8080

            [gemini]
            model = "gemini-2.5-flash"
            request_timeout_secs = 60

            [retry]
            max_attempts = 5
            base_delay_ms = 250
            factor = 3
            "#,
        )
        .unwrap();

        assert_eq!(config.server.host.as_deref(), Some("127.0.0.1"));
        assert_eq!(config.server.port, Some(8080));
        assert_eq!(config.gemini.model.as_deref(), Some("gemini-2.5-flash"));
        assert_eq!(config.gemini.request_timeout_secs, Some(60));
        assert!(config.gemini.base_url.is_none());
        assert_eq!(config.retry.max_attempts, Some(5));
        assert_eq!(config.retry.base_delay_ms, Some(250));
        assert_eq!(config.retry.factor, Some(3));
    }

    #[test]
    fn test_parse_partial() {
        let config = FileConfig::parse("[retry]\nmax_attempts = 2\n").unwrap();
        assert_eq!(config.retry.max_attempts, Some(2));
        assert_eq!(config.server, ServerSection::default());
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(FileConfig::parse("").unwrap(), FileConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport = 4100").unwrap();
        let config = FileConfig::load(Some(file.path()));
        assert_eq!(config.server.port, Some(4100));
    }

    #[test]
    fn test_load_invalid_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server\nport = ").unwrap();
        assert_eq!(FileConfig::load(Some(file.path())), FileConfig::default());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = FileConfig::load(Some(&dir.path().join("nope.toml")));
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_default_path() {
        let path = FileConfig::default_path();
        assert!(path.ends_with(".resolve/config.toml"));
    }
}
