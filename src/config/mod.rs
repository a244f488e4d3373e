// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[media]` - Video source and autoplay
//! - `[scroll]` - Smooth-scroll behavior
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` on the command line
//! 3. `REF_PLAYGROUND_CONFIG_DIR` environment variable
//! 4. Platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use ref_playground::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("fr".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Media card settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MediaConfig {
    /// URL or local path of the clip shown in the media card.
    #[serde(default = "default_source_url", skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,

    /// Start playback as soon as the media element is available.
    #[serde(default = "default_autoplay", skip_serializing_if = "Option::is_none")]
    pub autoplay: Option<bool>,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            source_url: default_source_url(),
            autoplay: default_autoplay(),
        }
    }
}

/// Smooth-scroll settings shared by the chat box and the page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScrollConfig {
    /// Animate scroll commands; `false` jumps straight to the target.
    #[serde(default = "default_smooth", skip_serializing_if = "Option::is_none")]
    pub smooth: Option<bool>,

    /// Animation length in milliseconds.
    #[serde(
        default = "default_scroll_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration_ms: Option<u64>,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth: default_smooth(),
            duration_ms: default_scroll_duration_ms(),
        }
    }
}

impl ScrollConfig {
    /// Effective animation length: zero when smoothing is off, otherwise the
    /// configured duration clamped to the supported range.
    #[must_use]
    pub fn animation_duration(&self) -> Duration {
        if !self.smooth.unwrap_or(true) {
            return Duration::ZERO;
        }
        let ms = self
            .duration_ms
            .unwrap_or(DEFAULT_SCROLL_DURATION_MS)
            .clamp(MIN_SCROLL_DURATION_MS, MAX_SCROLL_DURATION_MS);
        Duration::from_millis(ms)
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub media: MediaConfig,

    #[serde(default)]
    pub scroll: ScrollConfig,
}

fn default_source_url() -> Option<String> {
    Some(DEFAULT_MEDIA_SOURCE.to_string())
}

fn default_autoplay() -> Option<bool> {
    Some(DEFAULT_MEDIA_AUTOPLAY)
}

fn default_smooth() -> Option<bool> {
    Some(true)
}

fn default_scroll_duration_ms() -> Option<u64> {
    Some(DEFAULT_SCROLL_DURATION_MS)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
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
                    log::warn!("ignoring unreadable config {}: {}", path.display(), err);
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
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

/// Rewrites `general.theme_mode` in the settings file under `base_dir`,
/// leaving every other stored value as it is on disk.
///
/// Returns `Ok(false)` without writing when the existing file is unreadable,
/// so a broken file is never replaced by defaults.
pub fn update_theme_mode(theme_mode: ThemeMode, base_dir: Option<PathBuf>) -> Result<bool> {
    let (mut stored, warning) = load_with_override(base_dir.clone());
    if warning.is_some() {
        return Ok(false);
    }
    stored.general.theme_mode = theme_mode;
    save_with_override(&stored, base_dir)?;
    Ok(true)
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

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            media: MediaConfig {
                source_url: Some("/tmp/clip.mp4".to_string()),
                autoplay: Some(true),
            },
            scroll: ScrollConfig {
                smooth: Some(false),
                duration_ms: Some(250),
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

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_falls_back_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[general]\ntheme_mode = \"neon\"")
            .expect("failed to write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn update_theme_mode_keeps_other_stored_values() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base = Some(temp_dir.path().to_path_buf());
        let mut stored = Config::default();
        stored.media.source_url = Some("/srv/clips/intro.mp4".to_string());
        save_with_override(&stored, base.clone()).expect("failed to save config");

        assert!(update_theme_mode(ThemeMode::Light, base.clone()).expect("update"));

        let (loaded, warning) = load_with_override(base);
        assert!(warning.is_none());
        assert_eq!(loaded.general.theme_mode, ThemeMode::Light);
        assert_eq!(loaded.media.source_url.as_deref(), Some("/srv/clips/intro.mp4"));
    }

    #[test]
    fn update_theme_mode_leaves_unreadable_file_alone() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&path, "not = valid = toml").expect("failed to write config");

        let written = update_theme_mode(ThemeMode::Dark, Some(temp_dir.path().to_path_buf()))
            .expect("update");
        assert!(!written);
        assert_eq!(fs::read_to_string(&path).expect("read"), "not = valid = toml");
    }

    #[test]
    fn partial_file_keeps_section_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&config_path, "[general]\nlanguage = \"fr\"\n").expect("write");

        let loaded = load_from_path(&config_path).expect("load");
        assert_eq!(loaded.general.language.as_deref(), Some("fr"));
        assert_eq!(loaded.media.source_url.as_deref(), Some(DEFAULT_MEDIA_SOURCE));
        assert_eq!(loaded.scroll.duration_ms, Some(DEFAULT_SCROLL_DURATION_MS));
    }

    #[test]
    fn animation_duration_is_clamped() {
        let scroll = ScrollConfig {
            smooth: Some(true),
            duration_ms: Some(10_000),
        };
        assert_eq!(
            scroll.animation_duration(),
            Duration::from_millis(MAX_SCROLL_DURATION_MS)
        );

        let scroll = ScrollConfig {
            smooth: Some(true),
            duration_ms: Some(1),
        };
        assert_eq!(
            scroll.animation_duration(),
            Duration::from_millis(MIN_SCROLL_DURATION_MS)
        );
    }

    #[test]
    fn animation_duration_is_zero_when_smoothing_disabled() {
        let scroll = ScrollConfig {
            smooth: Some(false),
            duration_ms: Some(400),
        };
        assert_eq!(scroll.animation_duration(), Duration::ZERO);
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join(CONFIG_FILE);

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }
}
