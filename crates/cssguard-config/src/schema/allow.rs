//! Extra allow-list entries. These are added to the built-in lists; there
//! is no way to remove a built-in entry from a settings file.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AllowConfig {
    /// Declaration property names, e.g. `gap`.
    pub properties: Vec<String>,
    /// At-rule keywords including the `@`, e.g. `@supports`.
    pub at_rules: Vec<String>,
    /// Pseudo-classes including the leading colon, e.g. `:focus-within`.
    pub pseudo_classes: Vec<String>,
}
