//! Configuration and data directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/scene-console/`, `~/.cache/scene-console/`
//! - macOS: `~/Library/Application Support/scene-console/`, `~/Library/Caches/scene-console/`
//! - Windows: `%APPDATA%\scene-console\`, `%LOCALAPPDATA%\scene-console\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "scene-console";

/// Get the application config directory, creating it if missing
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the application cache directory, creating it if missing
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Path of the per-user console config file
///
/// Does not create the config directory.
pub fn console_config_path() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    Ok(base.join(APP_NAME).join("config.toml"))
}
