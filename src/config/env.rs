// src/config/env.rs
// Environment-based configuration: dotenv files and the Gemini credential

use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Env files loaded at startup, first match wins per variable
const DOTENV_FILES: [&str; 2] = [".env.local", ".env"];

/// Credentials loaded from environment variables
#[derive(Clone, Default)]
pub struct Credentials {
    /// Gemini/Google API key (GEMINI_API_KEY or GOOGLE_API_KEY)
    pub gemini_api_key: Option<String>,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("gemini_api_key", &self.gemini_api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Credentials {
    /// Load credentials from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load credentials through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|k| !k.trim().is_empty());
        let gemini_api_key = read("GEMINI_API_KEY").or_else(|| read("GOOGLE_API_KEY"));
        Self { gemini_api_key }
    }
}

/// One env file found at startup and whether it loaded
#[derive(Debug)]
pub struct DotenvLoad {
    pub path: PathBuf,
    pub result: Result<(), dotenvy::Error>,
}

impl DotenvLoad {
    /// Report the outcome. Called after the subscriber is installed, since the
    /// files may set `RUST_LOG` themselves.
    pub fn log(&self) {
        match &self.result {
            Ok(()) => debug!(path = %self.path.display(), "Loaded env file"),
            Err(e) => warn!(path = %self.path.display(), error = %e, "Failed to load env file"),
        }
    }
}

/// Load `.env.local` then `.env` from `dir`. Existing variables are never overwritten,
/// so the process environment beats `.env.local`, which beats `.env`.
/// Missing files are skipped and not reported.
pub fn load_dotenv(dir: &Path) -> Vec<DotenvLoad> {
    DOTENV_FILES
        .iter()
        .map(|name| dir.join(name))
        .filter(|path| path.exists())
        .map(|path| {
            let result = dotenvy::from_path(&path);
            DotenvLoad { path, result }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_gemini_key_preferred() {
        let creds = Credentials::from_lookup(lookup(&[
            ("GEMINI_API_KEY", "gemini"),
            ("GOOGLE_API_KEY", "google"),
        ]));
        assert_eq!(creds.gemini_api_key.as_deref(), Some("gemini"));
    }

    #[test]
    fn test_google_key_fallback() {
        let creds = Credentials::from_lookup(lookup(&[("GOOGLE_API_KEY", "google")]));
        assert_eq!(creds.gemini_api_key.as_deref(), Some("google"));
    }

    #[test]
    fn test_blank_key_is_absent() {
        let creds = Credentials::from_lookup(lookup(&[("GEMINI_API_KEY", "   ")]));
        assert!(creds.gemini_api_key.is_none());
    }

    #[test]
    fn test_debug_redacts_key() {
        let creds = Credentials::from_lookup(lookup(&[("GEMINI_API_KEY", "secret-value")]));
        let out = format!("{:?}", creds);
        assert!(!out.contains("secret-value"));
        assert!(out.contains("redacted"));
    }

    #[test]
    fn test_load_dotenv_missing_dir_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_dotenv(dir.path()).is_empty());
    }

    #[test]
    fn test_load_dotenv_reports_loaded_files_in_order() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".env.local"), "RESOLVE_DOTENV_LOCAL_ONLY=local\n").unwrap();
        std::fs::write(dir.path().join(".env"), "RESOLVE_DOTENV_LOCAL_ONLY=base\n").unwrap();

        let loads = load_dotenv(dir.path());

        assert_eq!(loads.len(), 2);
        assert!(loads[0].path.ends_with(".env.local"));
        assert!(loads[1].path.ends_with(".env"));
        assert!(loads.iter().all(|l| l.result.is_ok()));
        assert_eq!(std::env::var("RESOLVE_DOTENV_LOCAL_ONLY").unwrap(), "local");
    }
}
