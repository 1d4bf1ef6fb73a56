//! Configuration file discovery.
//!
//! An explicit `TRACERR_CONFIG` path always wins and must exist. Otherwise
//! the first existing `tracerr.toml` among [`search_paths`] is used.

use std::env;
use std::path::PathBuf;

use crate::constants::config::{APP_DIR, FILE_NAME, PATH_ENV};
use crate::errors::ConfigError;

/// Locate the configuration file to load, if any.
///
/// # Errors
///
/// Returns [`ConfigError::MissingFile`] when `TRACERR_CONFIG` is set but
/// does not name an existing file. The search paths are not consulted in
/// that case.
pub fn find_config_file() -> Result<Option<PathBuf>, ConfigError> {
    if let Some(explicit) = env::var_os(PATH_ENV).filter(|value| !value.is_empty()) {
        let path = PathBuf::from(explicit);
        if !path.is_file() {
            return Err(ConfigError::MissingFile { var: PATH_ENV, path });
        }
        return Ok(Some(path));
    }

    Ok(search_paths().into_iter().find(|path| path.is_file()))
}

/// Candidate config file locations, highest priority first:
/// the current directory, then the user config directory.
pub fn search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::with_capacity(2);
    if let Ok(current_dir) = env::current_dir() {
        paths.push(current_dir.join(FILE_NAME));
    }
    if let Some(config_dir) = user_config_dir() {
        paths.push(config_dir.join(APP_DIR).join(FILE_NAME));
    }
    paths
}

/// `$XDG_CONFIG_HOME` when set to a non-empty value, else `~/.config`.
fn user_config_dir() -> Option<PathBuf> {
    match env::var_os("XDG_CONFIG_HOME") {
        Some(dir) if !dir.is_empty() => Some(PathBuf::from(dir)),
        _ => dirs::home_dir().map(|home| home.join(".config")),
    }
}
