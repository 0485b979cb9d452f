// src/config.rs

//! Configuration loading utilities.
//!
//! Resolution order: defaults, then `homepage.toml`, then environment
//! variables, then command-line overrides.

use std::path::Path;

use crate::error::Result;
use crate::models::Config;

/// Load the tool configuration.
///
/// A missing or unreadable file falls back to defaults; environment
/// overrides and `source_override` are applied on top, then the result is
/// validated.
pub fn load_config(path: &Path, source_override: Option<&str>) -> Result<Config> {
    let mut config = if path.exists() {
        Config::load_or_default(path)
    } else {
        log::debug!("No config file at {}, using defaults", path.display());
        Config::default()
    };

    config.apply_env_overrides()?;

    if let Some(source) = source_override {
        config.site.source = source.to_string();
    }

    config.validate()?;
    Ok(config)
}
