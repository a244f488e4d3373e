// SPDX-License-Identifier: MPL-2.0
//! Preference persistence.
//!
//! Only the preference that changed is written back, on top of the file as
//! it is on disk. Values that exist for this run only, such as a `--video`
//! override, never reach the file.

use crate::config;
use crate::ui::theming::ThemeMode;
use std::path::PathBuf;

/// Stores the chosen theme in `settings.toml` under `config_dir`, or under
/// the resolved config directory when `None`.
pub fn persist_theme(theme_mode: ThemeMode, config_dir: Option<PathBuf>) {
    match config::update_theme_mode(theme_mode, config_dir) {
        Ok(true) => log::debug!("saved theme mode {:?}", theme_mode),
        Ok(false) => log::warn!("settings file is unreadable, theme change not saved"),
        Err(error) => log::warn!("failed to save config: {}", error),
    }
}
