//! TUI configuration persistence
//!
//! Saves and loads the simulated device profile and presentation options.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration file name
const CONFIG_FILE_NAME: &str = "config.json";

/// Configuration directory under ~/.config
const CONFIG_DIR_NAME: &str = "localauth";

/// Pre-decided outcome for a scripted (non-interactive) device.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ScriptedOutcome {
    /// The sensor matches an enrolled identity
    Grant,
    /// The sensor rejects the presented biometric
    Deny,
    /// The user dismisses the prompt
    Cancel,
}

/// Simulated biometric device profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeviceConfig {
    /// Whether the device has usable biometric hardware
    #[serde(default = "default_true")]
    pub available: bool,

    /// Whether any biometric identity is enrolled
    #[serde(default = "default_true")]
    pub enrolled: bool,

    /// Simulated sensor latency in milliseconds
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,

    /// When set, the device resolves on its own with this outcome instead
    /// of waiting for interactive keys
    #[serde(default)]
    pub scripted: Option<ScriptedOutcome>,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            available: true,
            enrolled: true,
            latency_ms: default_latency_ms(),
            scripted: None,
        }
    }
}

impl DeviceConfig {
    /// Sensor latency as a duration.
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

/// TUI configuration that persists across sessions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TuiConfig {
    /// Simulated device profile
    #[serde(default)]
    pub device: DeviceConfig,

    /// How long status displays stay on screen, in milliseconds
    #[serde(default = "default_presentation_delay_ms")]
    pub presentation_delay_ms: u64,

    /// Use the high-contrast theme variant
    #[serde(default)]
    pub high_contrast: bool,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            device: DeviceConfig::default(),
            presentation_delay_ms: default_presentation_delay_ms(),
            high_contrast: false,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_latency_ms() -> u64 {
    600
}

fn default_presentation_delay_ms() -> u64 {
    localauth_core::PRESENTATION_DELAY.as_millis() as u64
}

impl TuiConfig {
    /// Status display duration as a duration.
    pub fn presentation_delay(&self) -> Duration {
        Duration::from_millis(self.presentation_delay_ms)
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> Option<PathBuf> {
        // Try XDG_CONFIG_HOME first, then fall back to ~/.config
        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return Some(PathBuf::from(xdg_config).join(CONFIG_DIR_NAME));
        }

        dirs::config_dir().map(|p| p.join(CONFIG_DIR_NAME))
    }

    /// Get the full config file path.
    pub fn config_file_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from disk.
    ///
    /// Returns default configuration if the file doesn't exist or can't be
    /// parsed.
    pub fn load() -> Self {
        match Self::config_file_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!("Failed to parse config file: {}", e);
                Self::default()
            }),
            Err(e) => {
                tracing::warn!("Failed to read config file: {}", e);
                Self::default()
            }
        }
    }

    /// Save configuration to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        let config_dir = Self::config_dir().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&config_dir.join(CONFIG_FILE_NAME))
    }

    fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(dir) = path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir).map_err(|e| ConfigError::Io(e.to_string()))?;
            }
        }

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::Serialize(e.to_string()))?;
        fs::write(path, contents).map_err(|e| ConfigError::Io(e.to_string()))?;

        tracing::debug!("Saved config to {:?}", path);
        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("IO error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialize(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.device.available);
        assert!(config.device.enrolled);
        assert!(config.device.scripted.is_none());
        assert_eq!(config.presentation_delay(), Duration::from_secs(3));
        assert!(!config.high_contrast);
    }

    #[test]
    fn test_config_serialization() {
        let config = TuiConfig {
            device: DeviceConfig {
                available: false,
                enrolled: false,
                latency_ms: 50,
                scripted: Some(ScriptedOutcome::Cancel),
            },
            presentation_delay_ms: 1000,
            high_contrast: true,
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: TuiConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let parsed: TuiConfig =
            serde_json::from_str(r#"{"device": {"enrolled": false}}"#).unwrap();
        assert!(parsed.device.available);
        assert!(!parsed.device.enrolled);
        assert_eq!(parsed.device.latency_ms, 600);
        assert_eq!(parsed.presentation_delay_ms, 3000);
    }

    #[test]
    fn test_load_and_save_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);

        // Missing file loads defaults
        assert_eq!(TuiConfig::load_from(&path), TuiConfig::default());

        let config = TuiConfig {
            presentation_delay_ms: 250,
            ..TuiConfig::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(TuiConfig::load_from(&path), config);
    }

    #[test]
    fn test_corrupt_config_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "not json").unwrap();
        assert_eq!(TuiConfig::load_from(&path), TuiConfig::default());
    }
}
