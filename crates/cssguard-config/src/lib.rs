//! cssguard settings file.
//!
//! Provides TOML-based settings for the sanitizer with validation. Every
//! section has defaults, so partial files work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use cssguard::CssSanitizer;
//! use cssguard_config::load_config;
//!
//! let settings = load_config(None).expect("failed to load settings");
//! let sanitizer = CssSanitizer::new(settings.to_overrides());
//! println!("{}", sanitizer.sanitize(".a { color: red; }"));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::GuardSettings;
pub use toml_loader::{create_default_config, default_config_path, load_default, load_from_path};

use cssguard_common::ConfigError;
use std::path::Path;

/// Load settings from `path`, or from the platform default path if `None`.
pub fn load_config(path: Option<&Path>) -> Result<GuardSettings, ConfigError> {
    match path {
        Some(path) => load_from_path(path),
        None => load_default(),
    }
}

/// Serialize settings to a pretty-printed JSON string.
pub fn settings_to_json(settings: &GuardSettings) -> String {
    serde_json::to_string_pretty(settings)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize settings: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_to_json_contains_all_sections() {
        let json = settings_to_json(&GuardSettings::default());
        assert!(json.contains("\"limits\""));
        assert!(json.contains("\"allow\""));
        assert!(json.contains("\"urls\""));
        assert!(json.contains("\"fonts.googleapis.com\""));
    }

    #[test]
    fn default_settings_round_trip_through_json() {
        let json = settings_to_json(&GuardSettings::default());
        let parsed: GuardSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.limits.max_length, 65536);
        assert!(parsed.allow.at_rules.is_empty());
    }

    #[test]
    fn load_config_with_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("guard.toml");
        std::fs::write(&path, "[limits]\nmax_length = 1024\n").unwrap();

        let settings = load_config(Some(path.as_path())).unwrap();
        assert_eq!(settings.limits.max_length, 1024);
    }
}
