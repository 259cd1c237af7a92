//! Settings validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod allow;
mod helpers;
mod limits;
mod urls;


use crate::schema::GuardSettings;
use cssguard_common::ConfigError;

/// Run all validations on the settings, collecting all errors.
pub fn validate(settings: &GuardSettings) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    limits::validate_limits(&mut errors, settings);
    allow::validate_allow(&mut errors, settings);
    urls::validate_urls(&mut errors, settings);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
