//! Where quill keeps its config, user themes, user grammars and logs
//!
//! `QUILL_CONFIG_DIR` overrides the location outright. Otherwise the
//! directory is `quill/` under the platform config base:
//! `$XDG_CONFIG_HOME` or `~/.config` on Unix/macOS, `%APPDATA%` on Windows.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

const APP_DIR: &str = "quill";

/// Environment variable naming the config directory directly
pub const CONFIG_DIR_ENV: &str = "QUILL_CONFIG_DIR";

/// Base config directory for quill
pub fn config_dir() -> Option<PathBuf> {
    match env::var_os(CONFIG_DIR_ENV) {
        Some(dir) if !dir.is_empty() => Some(PathBuf::from(dir)),
        _ => config_base().map(|base| base.join(APP_DIR)),
    }
}

#[cfg(target_os = "windows")]
fn config_base() -> Option<PathBuf> {
    dirs::config_dir()
}

#[cfg(not(target_os = "windows"))]
fn config_base() -> Option<PathBuf> {
    env::var_os("XDG_CONFIG_HOME")
        .filter(|xdg| !xdg.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
}

/// `~/.config/quill/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// `~/.config/quill/themes/`
pub fn themes_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("themes"))
}

/// `~/.config/quill/languages/`
pub fn languages_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("languages"))
}

/// `~/.config/quill/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Create the logs directory if needed and return it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let dir = logs_dir().ok_or_else(|| "No config directory available".to_string())?;
    ensure_dir(&dir)?;
    Ok(dir)
}

fn ensure_dir(dir: &Path) -> Result<(), String> {
    fs::create_dir_all(dir).map_err(|e| format!("Failed to create {}: {}", dir.display(), e))
}
