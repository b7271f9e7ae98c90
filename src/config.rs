//! Configuration management for authlog

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::logging::Severity;

/// Build or deployment mode the host runs in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    Development,
    Production,
}

impl BuildMode {
    /// Mode of the running binary, derived from `debug_assertions`
    pub fn current() -> Self {
        if cfg!(debug_assertions) {
            BuildMode::Development
        } else {
            BuildMode::Production
        }
    }

    /// Threshold a store starts with in this mode
    pub fn initial_threshold(&self) -> Severity {
        match self {
            BuildMode::Development => Severity::Debug,
            BuildMode::Production => Severity::Info,
        }
    }
}

impl Default for BuildMode {
    fn default() -> Self {
        Self::current()
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Build mode; selects the initial threshold
    #[serde(default)]
    pub mode: BuildMode,

    /// Explicit initial threshold, overriding the mode default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<Severity>,

    /// Default filter directive for the tracing subscriber when RUST_LOG is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_log_filter() -> String {
    "authlog=info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: BuildMode::default(),
            threshold: None,
            log_filter: default_log_filter(),
        }
    }
}

impl Config {
    /// Load configuration from the default file, or return default if not found
    pub fn load() -> Result<Self> {
        Self::load_from(&config_file_path())
    }

    /// Load configuration from `path`, or return default if not found
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path).context("Failed to read config file")?;
            toml::from_str(&content).context("Failed to parse config file")
        } else {
            Ok(Self::default())
        }
    }

    /// Threshold a store built from this configuration starts with
    pub fn initial_threshold(&self) -> Severity {
        self.threshold.unwrap_or_else(|| self.mode.initial_threshold())
    }
}

/// Get the base configuration directory (~/.authlog)
/// Falls back to ./.authlog if home directory cannot be determined
pub fn config_dir() -> PathBuf {
    try_config_dir().unwrap_or_else(|| {
        tracing::warn!("Could not determine home directory, using current directory for config");
        PathBuf::from(".authlog")
    })
}

/// Try to get the base configuration directory, returning None if home dir is unavailable
pub fn try_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".authlog"))
}

/// Get the path to the config file
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Get the path to the diagnostic exports directory
pub fn exports_dir() -> PathBuf {
    config_dir().join("exports")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_mode_thresholds() {
        assert_eq!(BuildMode::Development.initial_threshold(), Severity::Debug);
        assert_eq!(BuildMode::Production.initial_threshold(), Severity::Info);
    }

    #[test]
    fn test_default_config_follows_build() {
        let config = Config::default();
        assert_eq!(config.mode, BuildMode::current());
        assert_eq!(config.initial_threshold(), BuildMode::current().initial_threshold());
        assert_eq!(config.log_filter, "authlog=info");
    }

    #[test]
    fn test_threshold_override() {
        let config = Config {
            mode: BuildMode::Production,
            threshold: Some(Severity::Traffic),
            ..Config::default()
        };
        assert_eq!(config.initial_threshold(), Severity::Traffic);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config {
            mode: BuildMode::Production,
            threshold: Some(Severity::Warning),
            log_filter: "authlog=debug".to_string(),
        };
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(parsed.mode, BuildMode::Production);
        assert_eq!(parsed.threshold, Some(Severity::Warning));
        assert_eq!(parsed.log_filter, "authlog=debug");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let parsed: Config = toml::from_str("mode = \"development\"").unwrap();
        assert_eq!(parsed.mode, BuildMode::Development);
        assert_eq!(parsed.threshold, None);
        assert_eq!(parsed.initial_threshold(), Severity::Debug);
        assert_eq!(parsed.log_filter, "authlog=info");
    }

    #[test]
    fn test_load_from_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_from(&temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(config.threshold, None);
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "mode = \"production\"\nthreshold = \"ERROR\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.mode, BuildMode::Production);
        assert_eq!(config.initial_threshold(), Severity::Error);
    }

    #[test]
    fn test_load_from_invalid_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "threshold = \"LOUD\"\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_config_dir_does_not_panic() {
        let dir = config_dir();
        assert!(dir.ends_with(".authlog"));
        assert!(exports_dir().ends_with("exports"));
    }
}
