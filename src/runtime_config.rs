// =============================================================================
// Runtime Configuration — provider endpoint, credentials and loop policy
// =============================================================================
//
// Loaded once at startup from a JSON file.  All fields carry
// `#[serde(default)]` so a partial file (or `{}`) still loads.  Indicator
// periods are deliberately absent: they are fixed in `report`.
//
// =============================================================================

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Environment variable that overrides `api_key`.
pub const API_KEY_ENV: &str = "ALPHAVANTAGE_API_KEY";

// =============================================================================
// Default-value helpers (required by serde `default = "..."` attribute)
// =============================================================================

fn default_api_key() -> String {
    "demo".to_string()
}

fn default_base_url() -> String {
    "https://www.alphavantage.co/query".to_string()
}

fn default_interval() -> String {
    "1min".to_string()
}

fn default_output_size() -> String {
    "compact".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_max_consecutive_failures() -> u32 {
    0
}

// =============================================================================
// RuntimeConfig
// =============================================================================

/// Top-level runtime configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct RuntimeConfig {
    // --- Provider ------------------------------------------------------------

    /// Alpha Vantage API key.
    #[serde(default = "default_api_key")]
    pub api_key: String,

    /// Query endpoint.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Bar interval requested from the provider (`1min`, `5min`, ...).
    #[serde(default = "default_interval")]
    pub interval: String,

    /// `compact` (latest 100 bars) or `full`.
    #[serde(default = "default_output_size")]
    pub output_size: String,

    /// Per-request HTTP timeout.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    // --- Loop policy ---------------------------------------------------------

    /// Stop after this many failed cycles in a row.  0 = never stop.
    #[serde(default = "default_max_consecutive_failures")]
    pub max_consecutive_failures: u32,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            api_key: default_api_key(),
            base_url: default_base_url(),
            interval: default_interval(),
            output_size: default_output_size(),
            request_timeout_secs: default_request_timeout_secs(),
            max_consecutive_failures: default_max_consecutive_failures(),
        }
    }
}

impl RuntimeConfig {
    /// Load configuration from a JSON file at `path`.
    ///
    /// If the file does not exist, returns an error so the caller can fall
    /// back to defaults with a warning.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read runtime config from {}", path.display()))?;

        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse runtime config from {}", path.display()))?;

        info!(
            path = %path.display(),
            interval = %config.interval,
            output_size = %config.output_size,
            "runtime config loaded"
        );

        Ok(config)
    }

    /// Replace `api_key` with `key` when it is present and non-blank.
    pub fn apply_api_key_override(&mut self, key: Option<String>) {
        if let Some(key) = key.map(|k| k.trim().to_string()).filter(|k| !k.is_empty()) {
            self.api_key = key;
            info!("API key taken from {API_KEY_ENV}");
        }
    }
}

impl std::fmt::Debug for RuntimeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuntimeConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("interval", &self.interval)
            .field("output_size", &self.output_size)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("max_consecutive_failures", &self.max_consecutive_failures)
            .finish()
    }
}

// =============================================================================
// Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_expected_values() {
        let cfg = RuntimeConfig::default();
        assert_eq!(cfg.api_key, "demo");
        assert_eq!(cfg.base_url, "https://www.alphavantage.co/query");
        assert_eq!(cfg.interval, "1min");
        assert_eq!(cfg.output_size, "compact");
        assert_eq!(cfg.request_timeout_secs, 10);
        assert_eq!(cfg.max_consecutive_failures, 0);
    }

    #[test]
    fn deserialise_empty_json_uses_defaults() {
        let cfg: RuntimeConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.interval, "1min");
        assert_eq!(cfg.request_timeout_secs, 10);
    }

    #[test]
    fn deserialise_partial_json_fills_defaults() {
        let json = r#"{ "interval": "5min", "max_consecutive_failures": 3 }"#;
        let cfg: RuntimeConfig = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.interval, "5min");
        assert_eq!(cfg.max_consecutive_failures, 3);
        assert_eq!(cfg.api_key, "demo");
        assert_eq!(cfg.output_size, "compact");
    }

    #[test]
    fn load_missing_file_is_error() {
        let path = std::env::temp_dir().join("ticker-watch-no-such-config.json");
        assert!(RuntimeConfig::load(&path).is_err());
    }

    #[test]
    fn load_reads_file() {
        let path = std::env::temp_dir().join(format!(
            "ticker-watch-config-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{ "output_size": "full" }"#).unwrap();
        let cfg = RuntimeConfig::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(cfg.output_size, "full");
    }

    #[test]
    fn api_key_override() {
        let mut cfg = RuntimeConfig::default();
        cfg.apply_api_key_override(None);
        assert_eq!(cfg.api_key, "demo");
        cfg.apply_api_key_override(Some("   ".into()));
        assert_eq!(cfg.api_key, "demo");
        cfg.apply_api_key_override(Some(" abc123 ".into()));
        assert_eq!(cfg.api_key, "abc123");
    }

    #[test]
    fn debug_redacts_api_key() {
        let cfg = RuntimeConfig {
            api_key: "topsecret".into(),
            ..RuntimeConfig::default()
        };
        assert!(!format!("{cfg:?}").contains("topsecret"));
    }
}
