//! Configuration and data directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/blog-shelf/`, `~/.cache/blog-shelf/`
//! - macOS: `~/Library/Application Support/blog-shelf/`, `~/Library/Caches/blog-shelf/`
//! - Windows: `%APPDATA%\blog-shelf\`, `%LOCALAPPDATA%\blog-shelf\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "blog-shelf";

/// Get the application config directory, creating it if needed
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;
    Ok(dir)
}

/// Get the application cache directory (log files), creating it if needed
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;
    Ok(dir)
}

/// Get path to the app config file inside the config directory
pub fn app_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_path_name() {
        // dirs may be unavailable in minimal sandboxes; only check when it is
        if let Ok(path) = app_config_path() {
            assert!(path.ends_with("config.toml"));
            assert!(path.parent().unwrap().ends_with(APP_NAME));
        }
    }
}
