//! Sanitizer configuration: allow-lists, the length cap, and URL hooks.
//!
//! A [`Configuration`] is built once from [`Overrides`] and never changes
//! afterwards. Set-valued options are merged with the built-in lists
//! (they can only grow); scalar options replace the default outright.

mod defaults;
mod url_hooks;


use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

pub use defaults::{
    DEFAULT_ALLOWED_AT_RULES, DEFAULT_ALLOWED_HOSTS, DEFAULT_ALLOWED_PROPERTIES,
    DEFAULT_ALLOWED_PSEUDO_CLASSES, DEFAULT_MAX_LENGTH,
};
pub use url_hooks::{HostAllowList, StructuralUrlValidator, UrlSanitizer, UrlValidator};

// =============================================================================
// OVERRIDES
// =============================================================================

/// Caller-supplied options. Every field is optional.
#[derive(Clone, Default)]
pub struct Overrides {
    /// Replaces the default length cap.
    pub max_length: Option<usize>,
    /// Added to the default property allow-list.
    pub allowed_properties: Option<HashSet<String>>,
    /// Added to the default at-rule allow-list.
    pub allowed_at_rules: Option<HashSet<String>>,
    /// Added to the default pseudo-class list.
    pub allowed_pseudo_classes: Option<HashSet<String>>,
    /// Replaces the default structural URL check.
    pub validate_url: Option<Arc<dyn UrlValidator>>,
    /// Replaces the default host allow-list.
    pub sanitize_url: Option<Arc<dyn UrlSanitizer>>,
}

impl Overrides {
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn with_properties<I, S>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        extend_set(&mut self.allowed_properties, properties);
        self
    }

    pub fn with_at_rules<I, S>(mut self, at_rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        extend_set(&mut self.allowed_at_rules, at_rules);
        self
    }

    pub fn with_pseudo_classes<I, S>(mut self, pseudo_classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        extend_set(&mut self.allowed_pseudo_classes, pseudo_classes);
        self
    }

    pub fn with_url_validator(mut self, validator: impl UrlValidator + 'static) -> Self {
        self.validate_url = Some(Arc::new(validator));
        self
    }

    pub fn with_url_sanitizer(mut self, sanitizer: impl UrlSanitizer + 'static) -> Self {
        self.sanitize_url = Some(Arc::new(sanitizer));
        self
    }
}

impl fmt::Debug for Overrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Overrides")
            .field("max_length", &self.max_length)
            .field("allowed_properties", &self.allowed_properties)
            .field("allowed_at_rules", &self.allowed_at_rules)
            .field("allowed_pseudo_classes", &self.allowed_pseudo_classes)
            .field("validate_url", &self.validate_url.as_ref().map(|_| "<hook>"))
            .field("sanitize_url", &self.sanitize_url.as_ref().map(|_| "<hook>"))
            .finish()
    }
}

fn extend_set<I, S>(slot: &mut Option<HashSet<String>>, items: I)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    slot.get_or_insert_with(HashSet::new)
        .extend(items.into_iter().map(Into::into));
}

// =============================================================================
// CONFIGURATION
// =============================================================================

/// The effective, immutable sanitizer configuration.
#[derive(Clone)]
pub struct Configuration {
    max_length: usize,
    allowed_properties: HashSet<String>,
    allowed_at_rules: HashSet<String>,
    allowed_pseudo_classes: HashSet<String>,
    validate_url: Arc<dyn UrlValidator>,
    sanitize_url: Arc<dyn UrlSanitizer>,
}

impl Configuration {
    /// Merge `overrides` with the built-in defaults.
    pub fn new(overrides: Overrides) -> Self {
        Self {
            max_length: overrides.max_length.unwrap_or(DEFAULT_MAX_LENGTH),
            allowed_properties: merge_set(DEFAULT_ALLOWED_PROPERTIES, overrides.allowed_properties),
            allowed_at_rules: merge_set(DEFAULT_ALLOWED_AT_RULES, overrides.allowed_at_rules),
            allowed_pseudo_classes: merge_set(
                DEFAULT_ALLOWED_PSEUDO_CLASSES,
                overrides.allowed_pseudo_classes,
            ),
            validate_url: overrides
                .validate_url
                .unwrap_or_else(|| Arc::new(StructuralUrlValidator)),
            sanitize_url: overrides
                .sanitize_url
                .unwrap_or_else(|| Arc::new(HostAllowList::default())),
        }
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn allowed_properties(&self) -> &HashSet<String> {
        &self.allowed_properties
    }

    pub fn allowed_at_rules(&self) -> &HashSet<String> {
        &self.allowed_at_rules
    }

    pub fn allowed_pseudo_classes(&self) -> &HashSet<String> {
        &self.allowed_pseudo_classes
    }

    pub fn allows_property(&self, property: &str) -> bool {
        self.allowed_properties.contains(property)
    }

    pub fn allows_at_rule(&self, keyword: &str) -> bool {
        self.allowed_at_rules.contains(keyword)
    }

    /// Run the configured structural URL check.
    pub fn validate_url(&self, url: &str) -> bool {
        self.validate_url.validate(url)
    }

    /// Run the configured URL sanitizer. `""` means "drop".
    pub fn sanitize_url(&self, url: &str) -> String {
        self.sanitize_url.sanitize(url)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new(Overrides::default())
    }
}

impl fmt::Debug for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Configuration")
            .field("max_length", &self.max_length)
            .field("allowed_properties", &self.allowed_properties.len())
            .field("allowed_at_rules", &self.allowed_at_rules)
            .field("allowed_pseudo_classes", &self.allowed_pseudo_classes.len())
            .finish_non_exhaustive()
    }
}

fn merge_set(defaults: &[&str], extra: Option<HashSet<String>>) -> HashSet<String> {
    let mut set: HashSet<String> = defaults.iter().map(|s| (*s).to_string()).collect();
    if let Some(extra) = extra {
        set.extend(extra);
    }
    set
}
