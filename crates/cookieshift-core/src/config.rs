//! Runtime configuration for the conversion tooling.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Top-level cookieshift configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookieShiftConfig {
    /// Pretty-print JSON output.
    #[serde(default = "default_pretty")]
    pub pretty: bool,
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter", rename = "logFilter")]
    pub log_filter: String,
}

fn default_pretty() -> bool {
    true
}
fn default_log_filter() -> String {
    "info".into()
}

impl Default for CookieShiftConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
            log_filter: default_log_filter(),
        }
    }
}

impl CookieShiftConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(
            std::env::var("COOKIESHIFT_PRETTY").ok().as_deref(),
            std::env::var("COOKIESHIFT_LOG").ok().as_deref(),
        )
    }

    fn from_vars(pretty: Option<&str>, log_filter: Option<&str>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(raw) = pretty {
            config.pretty = parse_flag(raw).ok_or_else(|| {
                Error::Config(format!("COOKIESHIFT_PRETTY: expected a boolean, got '{raw}'"))
            })?;
        }
        if let Some(filter) = log_filter.map(str::trim).filter(|f| !f.is_empty()) {
            config.log_filter = filter.to_string();
        }
        Ok(config)
    }

    /// Load config from a JSON file, or return defaults if it does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CookieShiftConfig::default();
        assert!(config.pretty);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_from_vars_overrides() {
        let config = CookieShiftConfig::from_vars(Some("false"), Some("debug")).unwrap();
        assert!(!config.pretty);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_from_vars_blank_filter_keeps_default() {
        let config = CookieShiftConfig::from_vars(None, Some("  ")).unwrap();
        assert_eq!(config, CookieShiftConfig::default());
    }

    #[test]
    fn test_from_vars_rejects_garbage_flag() {
        let err = CookieShiftConfig::from_vars(Some("maybe"), None).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = CookieShiftConfig::load(&dir.path().join("cookieshift.json")).unwrap();
        assert_eq!(config, CookieShiftConfig::default());
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cookieshift.json");
        std::fs::write(&path, r#"{ "pretty": false }"#).unwrap();

        let config = CookieShiftConfig::load(&path).unwrap();
        assert!(!config.pretty);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cookieshift.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = CookieShiftConfig::load(&path).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
