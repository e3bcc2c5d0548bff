//! Settings loading
//!
//! Reads the user's `config.toml` if present, otherwise falls back to
//! defaults. A malformed file is logged and ignored rather than
//! treated as fatal.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::types::Settings;

/// Path to the user config file: `<config_dir>/wowbank/config.toml`
pub fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("wowbank").join("config.toml"))
}

/// Load settings from the default location, falling back to defaults.
pub fn load_settings() -> Settings {
    match config_file_path() {
        Some(path) => load_settings_from(&path),
        None => {
            warn!("No config directory available, using default settings");
            Settings::default()
        }
    }
}

/// Load settings from a specific path, falling back to defaults.
pub fn load_settings_from(path: &Path) -> Settings {
    if !path.exists() {
        debug!("No config file at {}, using defaults", path.display());
        return Settings::default();
    }

    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            warn!("Failed to read {}: {e}, using defaults", path.display());
            return Settings::default();
        }
    };

    match toml::from_str(&contents) {
        Ok(settings) => {
            debug!("Loaded settings from {}", path.display());
            settings
        }
        Err(e) => {
            warn!("Failed to parse {}: {e}, using defaults", path.display());
            Settings::default()
        }
    }
}
