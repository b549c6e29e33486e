// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration: loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[window]` - Initial window size
//! - `[logging]` - Default log filter
//!
//! Every key is optional. A missing file means defaults; the gallery itself
//! is never configured here.
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` on the command line
//! 3. Set `ART_SPACE_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use art_space::config;
//!
//! let (mut config, _warning) = config::load();
//! config.logging.level = Some("debug".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Window geometry settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WindowConfig {
    /// Initial window width in logical pixels.
    #[serde(default = "default_width", skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,

    /// Initial window height in logical pixels.
    #[serde(default = "default_height", skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

impl WindowConfig {
    /// Returns the configured size, never smaller than the minimum window.
    #[must_use]
    pub fn size(&self) -> (f32, f32) {
        let width = self.width.unwrap_or(DEFAULT_WINDOW_WIDTH);
        let height = self.height.unwrap_or(DEFAULT_WINDOW_HEIGHT);
        (
            clamp_dimension(width, MIN_WINDOW_WIDTH, DEFAULT_WINDOW_WIDTH),
            clamp_dimension(height, MIN_WINDOW_HEIGHT, DEFAULT_WINDOW_HEIGHT),
        )
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// `tracing` filter directive, e.g. `info` or `art_space=debug`.
    #[serde(default = "default_log_level", skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub window: WindowConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_width() -> Option<f32> {
    Some(DEFAULT_WINDOW_WIDTH)
}

fn default_height() -> Option<f32> {
    Some(DEFAULT_WINDOW_HEIGHT)
}

fn default_log_level() -> Option<String> {
    Some(DEFAULT_LOG_LEVEL.to_string())
}

/// NaN and infinities fall back to the default instead of poisoning the
/// window settings.
fn clamp_dimension(value: f32, min: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value.max(min)
    } else {
        fallback
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!(
                            "ignoring {}, using defaults: {}",
                            path.display(),
                            err
                        )),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            window: WindowConfig {
                width: Some(500.0),
                height: Some(900.0),
            },
            logging: LoggingConfig {
                level: Some("art_space=debug".to_string()),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(message)) => assert!(!message.is_empty()),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[window]\nwidth = 400.0\n").expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("partial config loads");
        assert_eq!(loaded.window.width, Some(400.0));
        assert_eq!(loaded.window.height, Some(DEFAULT_WINDOW_HEIGHT));
        assert_eq!(loaded.logging, LoggingConfig::default());
    }

    #[test]
    fn load_with_override_missing_file_returns_defaults_silently() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_invalid_file_warns_and_uses_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[window]\nwidth = \"wide\"\n")
            .expect("failed to write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.expect("warning expected").contains(CONFIG_FILE));
    }

    #[test]
    fn save_with_override_writes_into_directory() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let dir = temp_dir.path().join("deep").join("path");
        let config = Config::default();

        save_with_override(&config, Some(dir.clone())).expect("save should succeed");
        assert!(dir.join(CONFIG_FILE).exists());
    }

    #[test]
    fn window_size_is_clamped_to_minimum() {
        let window = WindowConfig {
            width: Some(100.0),
            height: Some(f32::NAN),
        };
        assert_eq!(window.size(), (MIN_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT));
    }

    #[test]
    fn window_size_defaults_when_unset() {
        let window = WindowConfig {
            width: None,
            height: None,
        };
        assert_eq!(window.size(), (DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT));
    }
}
