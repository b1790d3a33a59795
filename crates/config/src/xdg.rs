//! XDG Base Directory support for shadegen.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "shadegen";

/// Get the configuration directory following XDG conventions.
///
/// Returns `$XDG_CONFIG_HOME/shadegen` or `~/.config/shadegen`.
pub fn get_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|p| p.join(APP_NAME))
        .context("Failed to determine config directory")
}

/// Get the data directory following XDG conventions.
///
/// Returns `$XDG_DATA_HOME/shadegen` or `~/.local/share/shadegen`.
pub fn get_data_dir() -> Result<PathBuf> {
    dirs::data_dir()
        .map(|p| p.join(APP_NAME))
        .context("Failed to determine data directory")
}
