//! Settings file schema.
//!
//! All structs use `serde(default)` so partial files work. Missing fields
//! take the same defaults as the sanitizer itself.

mod allow;
mod limits;
mod urls;

pub use allow::*;
pub use limits::*;
pub use urls::*;

use cssguard::{HostAllowList, Overrides};
use serde::{Deserialize, Serialize};

/// Root of the settings file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardSettings {
    pub limits: LimitsConfig,
    pub allow: AllowConfig,
    pub urls: UrlConfig,
}

impl GuardSettings {
    /// Translate into sanitizer overrides.
    ///
    /// Allow-list entries are added to the built-in lists; the host list
    /// replaces the default URL sanitizer.
    pub fn to_overrides(&self) -> Overrides {
        Overrides::default()
            .with_max_length(self.limits.max_length)
            .with_properties(self.allow.properties.iter().cloned())
            .with_at_rules(self.allow.at_rules.iter().cloned())
            .with_pseudo_classes(self.allow.pseudo_classes.iter().cloned())
            .with_url_sanitizer(HostAllowList::new(&self.urls.allowed_hosts))
    }
}
