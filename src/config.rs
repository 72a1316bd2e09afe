//! Configuration handling for the TUI

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::state::DEFAULT_NOTIFICATION_DURATION;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// How long copy notifications stay in the status bar, in milliseconds
    pub notification_ms: Option<u64>,
    /// Directory for rolling log files; defaults to the platform data dir
    pub log_dir: Option<PathBuf>,
}

impl TuiConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "traefik-labels", "traefik-labels")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Directory for log files: the configured one, else `<data dir>/logs`
    pub fn resolved_log_dir(&self) -> Option<PathBuf> {
        self.log_dir
            .clone()
            .or_else(|| Self::project_dirs().map(|dirs| dirs.data_dir().join("logs")))
    }

    /// Load configuration from the user config directory
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file, defaulting when it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        Ok(config)
    }

    pub fn notification_duration(&self) -> Duration {
        self.notification_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_NOTIFICATION_DURATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.notification_ms.is_none());
        assert!(config.log_dir.is_none());
        assert_eq!(config.notification_duration(), Duration::from_millis(2000));
    }

    #[test]
    fn test_notification_duration_override() {
        let config = TuiConfig {
            notification_ms: Some(500),
            ..Default::default()
        };
        assert_eq!(config.notification_duration(), Duration::from_millis(500));
    }

    #[test]
    fn test_serialization() {
        let config = TuiConfig {
            notification_ms: Some(1500),
            log_dir: Some(PathBuf::from("/tmp/traefik-labels")),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.notification_ms, Some(1500));
        assert_eq!(parsed.log_dir, Some(PathBuf::from("/tmp/traefik-labels")));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: TuiConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.notification_ms.is_none());
        assert!(parsed.log_dir.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"notification_ms": 750, "unknown_field": "value"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.notification_ms, Some(750));
    }

    #[test]
    fn test_load_from_missing_file_returns_default() {
        let path = std::env::temp_dir().join("traefik-labels-missing-config.json");
        let _ = fs::remove_file(&path);
        let config = TuiConfig::load_from(&path).unwrap();
        assert!(config.notification_ms.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "traefik-labels-config-{}.json",
            std::process::id()
        ));
        fs::write(&path, r#"{"notification_ms": 300}"#).unwrap();
        let config = TuiConfig::load_from(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(config.notification_ms, Some(300));
    }

    #[test]
    fn test_load_from_invalid_file_errors() {
        let path = std::env::temp_dir().join(format!(
            "traefik-labels-bad-config-{}.json",
            std::process::id()
        ));
        fs::write(&path, "not json").unwrap();
        let result = TuiConfig::load_from(&path);
        let _ = fs::remove_file(&path);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("invalid config file"));
    }

    #[test]
    fn test_config_path_ends_with_config_file() {
        if let Some(path) = TuiConfig::config_path() {
            assert!(path.ends_with("config.json"));
            assert!(path
                .parent()
                .and_then(Path::file_name)
                .is_some_and(|name| name.to_string_lossy().contains("traefik-labels")));
        }
    }

    #[test]
    fn test_configured_log_dir_wins() {
        let config = TuiConfig {
            log_dir: Some(PathBuf::from("/tmp/traefik-labels-logs")),
            ..Default::default()
        };
        assert_eq!(
            config.resolved_log_dir(),
            Some(PathBuf::from("/tmp/traefik-labels-logs"))
        );
    }

    #[test]
    fn test_default_log_dir_is_under_data_dir() {
        let config = TuiConfig::default();
        if let Some(dir) = config.resolved_log_dir() {
            assert!(dir.ends_with("logs"));
        }
    }
}
