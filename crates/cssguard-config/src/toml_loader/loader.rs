//! Core TOML settings loading: read from path or platform default.

use crate::schema::GuardSettings;
use crate::validation;
use cssguard_common::ConfigError;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{info, warn};

use super::paths::default_config_path;

/// Load settings from a specific TOML file path.
///
/// Missing fields take their defaults. If validation fails, a warning is
/// logged and the parsed settings are returned as-is.
pub fn load_from_path(path: &Path) -> Result<GuardSettings, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::ParseError(format!("failed to read {}: {e}", path.display())),
    })?;

    let settings: GuardSettings = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&settings) {
        warn!("settings validation warning: {e}; using parsed settings as-is");
    }

    info!("loaded settings from {}", path.display());
    Ok(settings)
}

/// Load settings from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/cssguard/config.toml`
/// On Linux: `~/.config/cssguard/config.toml`
///
/// A missing file is not an error; built-in defaults are returned.
pub fn load_default() -> Result<GuardSettings, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(settings) => Ok(settings),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no settings found at {}, using defaults", path.display());
            Ok(GuardSettings::default())
        }
        Err(e) => Err(e),
    }
}
