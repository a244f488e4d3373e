// SPDX-License-Identifier: MPL-2.0
//! Location of the directory holding `settings.toml`.
//!
//! Candidates are tried in this order, first hit wins:
//!
//! 1. an explicit path passed by the caller (tests)
//! 2. `--config-dir`, recorded once at startup with [`init_cli_overrides`]
//! 3. the `REF_PLAYGROUND_CONFIG_DIR` environment variable, when non-empty
//! 4. the platform config directory from `dirs`, plus the application name

use std::fmt;
use std::path::PathBuf;
use std::sync::OnceLock;

const APP_DIR_NAME: &str = "RefPlayground";

/// Environment variable naming the config directory.
pub const ENV_CONFIG_DIR: &str = "REF_PLAYGROUND_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Where a resolved config directory came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigDirOrigin {
    Explicit,
    CommandLine,
    Environment,
    Platform,
}

impl fmt::Display for ConfigDirOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ConfigDirOrigin::Explicit => "explicit path",
            ConfigDirOrigin::CommandLine => "--config-dir",
            ConfigDirOrigin::Environment => ENV_CONFIG_DIR,
            ConfigDirOrigin::Platform => "platform default",
        };
        f.write_str(label)
    }
}

/// Records the `--config-dir` argument. Later calls are ignored.
pub fn init_cli_overrides(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        log::warn!("--config-dir was already recorded, keeping the first value");
    }
}

fn env_config_dir() -> Option<PathBuf> {
    std::env::var_os(ENV_CONFIG_DIR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn platform_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join(APP_DIR_NAME))
}

/// Resolves the config directory and reports which candidate supplied it.
pub fn resolve_config_dir(explicit: Option<PathBuf>) -> Option<(PathBuf, ConfigDirOrigin)> {
    let cli = || CLI_CONFIG_DIR.get().cloned().flatten();

    explicit
        .map(|path| (path, ConfigDirOrigin::Explicit))
        .or_else(|| cli().map(|path| (path, ConfigDirOrigin::CommandLine)))
        .or_else(|| env_config_dir().map(|path| (path, ConfigDirOrigin::Environment)))
        .or_else(|| platform_config_dir().map(|path| (path, ConfigDirOrigin::Platform)))
}

/// Config directory, e.g. `~/.config/RefPlayground/` on Linux.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Config directory, preferring `override_path` when given.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    let (path, origin) = resolve_config_dir(override_path)?;
    log::debug!("config directory {} (from {})", path.display(), origin);
    Some(path)
}
