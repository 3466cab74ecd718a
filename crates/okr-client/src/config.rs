// config.rs — API client configuration.
//
// Centralizes endpoint selection and the feature flags the workflow needs.
// The base URL comes from a profile default (local vs. deployed), can be
// pinned in a TOML file, and is always overridable through the
// OKR_API_BASE_URL environment variable.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ClientError;
use crate::retry::RetryPolicy;

/// Base URL used while developing against a local service.
pub const LOCAL_BASE_URL: &str = "http://localhost:5000";

/// Base URL of the deployed generation service.
pub const DEPLOYED_BASE_URL: &str = "https://rag-aws-maker-jbs.onrender.com";

/// Environment variable that overrides the profile's base URL.
pub const BASE_URL_ENV: &str = "OKR_API_BASE_URL";

/// Which environment the client talks to by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiProfile {
    Local,
    Deployed,
}

impl ApiProfile {
    /// The profile's default base URL.
    pub fn default_base_url(self) -> &'static str {
        match self {
            ApiProfile::Local => LOCAL_BASE_URL,
            ApiProfile::Deployed => DEPLOYED_BASE_URL,
        }
    }
}

/// Configuration for [`ApiClient`](crate::ApiClient).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the generation service, without a trailing slash.
    pub base_url: String,

    /// Substitute locally generated goals when the upstream call fails
    /// after exhausting its retries.
    #[serde(default = "default_enable_fallback")]
    pub enable_fallback: bool,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Retry budget and backoff for the generate call.
    #[serde(default)]
    pub retry: RetryPolicy,
}

const fn default_enable_fallback() -> bool {
    true
}

const fn default_timeout_secs() -> u64 {
    30
}

impl ApiConfig {
    /// Build a config from a profile, honoring the env override.
    pub fn for_profile(profile: ApiProfile) -> Self {
        let base_url = std::env::var(BASE_URL_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| profile.default_base_url().to_string());
        Self {
            base_url,
            enable_fallback: default_enable_fallback(),
            timeout_secs: default_timeout_secs(),
            retry: RetryPolicy::default(),
        }
    }

    /// Load a config from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ClientError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ClientError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config: Self = toml::from_str(&raw)?;
        if config.base_url.trim().is_empty() {
            return Err(ClientError::Config(format!(
                "{}: base_url must not be empty",
                path.display()
            )));
        }
        Ok(config)
    }

    /// Request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::for_profile(ApiProfile::Local)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn profile_defaults() {
        assert_eq!(ApiProfile::Local.default_base_url(), LOCAL_BASE_URL);
        assert_eq!(ApiProfile::Deployed.default_base_url(), DEPLOYED_BASE_URL);
    }

    #[test]
    fn env_var_overrides_profile_base_url() {
        std::env::set_var(BASE_URL_ENV, "http://127.0.0.1:8080");
        let config = ApiConfig::for_profile(ApiProfile::Deployed);
        std::env::remove_var(BASE_URL_ENV);
        assert_eq!(config.base_url, "http://127.0.0.1:8080");
    }

    #[test]
    fn from_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "base_url = \"http://localhost:9999\"").unwrap();
        let config = ApiConfig::from_file(file.path()).unwrap();
        assert_eq!(config.base_url, "http://localhost:9999");
        assert!(config.enable_fallback);
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.retry.max_attempts, 3);
    }

    #[test]
    fn from_file_rejects_empty_base_url() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "base_url = \"\"").unwrap();
        assert!(matches!(
            ApiConfig::from_file(file.path()),
            Err(ClientError::Config(_))
        ));
    }

    #[test]
    fn from_file_reports_missing_file() {
        assert!(matches!(
            ApiConfig::from_file("/nonexistent/okr.toml"),
            Err(ClientError::Io { .. })
        ));
    }

    #[test]
    fn toml_round_trip() {
        let config = ApiConfig {
            base_url: "http://localhost:5000".to_string(),
            enable_fallback: false,
            timeout_secs: 10,
            retry: RetryPolicy {
                max_attempts: 5,
                base_delay_ms: 250,
            },
        };
        let raw = toml::to_string(&config).unwrap();
        let parsed: ApiConfig = toml::from_str(&raw).unwrap();
        assert_eq!(parsed, config);
    }
}
