//! Allow-list based sanitizer for untrusted CSS.
//!
//! Strips or neutralizes anything not explicitly allowed: unknown
//! properties, `background` URLs from foreign hosts, and blocks nested
//! where no allowed context permits them. It is a filter, not a validator;
//! the output is not guaranteed to be valid CSS.
//!
//! # Quick Start
//!
//! ```rust
//! use cssguard::{CssSanitizer, Overrides};
//!
//! let sanitizer = CssSanitizer::new(Overrides::default().with_properties(["gap"]));
//! let css = sanitizer.sanitize(".card { color: red; gap: 4px; behavior: url(x.htc); }");
//! assert_eq!(css, ".card {color: red; gap: 4px;}");
//! ```
//!
//! # Known limitations
//!
//! - Allow-listed at-rule bodies (`@media`, `@keyframes`, ...) are emitted
//!   verbatim; their declarations are never property-filtered.
//! - Only `background` / `background-image` values are URL-vetted, and only
//!   their first `url(...)`. Other allowed values pass through unchanged.
//! - Selectors are never inspected.

pub mod config;
pub mod property;
pub mod scanner;

pub use config::{
    Configuration, HostAllowList, Overrides, StructuralUrlValidator, UrlSanitizer, UrlValidator,
};
pub use cssguard_common::Rejection;
pub use property::Declaration;

/// A configured sanitizer. Cheap to clone and safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct CssSanitizer {
    config: Configuration,
}

impl CssSanitizer {
    pub fn new(overrides: Overrides) -> Self {
        Self::with_config(Configuration::new(overrides))
    }

    pub fn with_config(config: Configuration) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Sanitize a stylesheet. Never fails; returns `""` if nothing survives.
    pub fn sanitize(&self, css: &str) -> String {
        scanner::sanitize_css(&self.config, css)
    }

    /// Sanitize raw bytes. Anything that is not UTF-8 text is rejected whole.
    pub fn sanitize_bytes(&self, input: &[u8]) -> String {
        match std::str::from_utf8(input) {
            Ok(css) => self.sanitize(css),
            Err(e) => {
                tracing::debug!(
                    reason = %Rejection::RejectedInput,
                    valid_up_to = e.valid_up_to(),
                    "input dropped"
                );
                String::new()
            }
        }
    }

    /// Sanitize one declaration, returning `"property: value;"` or `""`.
    pub fn sanitize_property(&self, property: &str, value: &str) -> String {
        property::sanitize_property(&self.config, property, value)
    }
}
