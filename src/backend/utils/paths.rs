//! Path utilities.

use std::path::PathBuf;

use anyhow::Result;

/// Name of the main application data directory.
const APP_DIR: &str = "Tally";

/// Get the base application data directory (`Tally`).
#[inline]
pub fn get_app_dir() -> Result<PathBuf> {
    let base_dir = match std::env::consts::OS {
        "windows" => std::env::var("APPDATA")
            .ok()
            .map(PathBuf::from)
            .ok_or_else(|| anyhow::anyhow!("Could not determine AppData directory"))?,
        "macos" => std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join("Library/Application Support"))
            .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?,
        _ => std::env::var("HOME")
            .ok()
            .map(PathBuf::from)
            .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?,
    };
    Ok(base_dir.join(APP_DIR))
}

/// Directory that CSV exports are written into.
pub fn get_export_dir() -> Result<PathBuf> {
    Ok(get_app_dir()?.join("exports"))
}
