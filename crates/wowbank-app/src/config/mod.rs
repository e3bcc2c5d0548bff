//! Configuration file parsing for the WowBank demo
//!
//! Supports a single optional file: `<config_dir>/wowbank/config.toml`.
//! A missing or unparseable file falls back to defaults.

pub mod settings;
pub mod types;

pub use settings::{config_file_path, load_settings, load_settings_from};
pub use types::*;
