//! URL host allow-list for `background` / `background-image`.

use cssguard::config::DEFAULT_ALLOWED_HOSTS;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlConfig {
    /// Hosts whose URLs are kept. Replaces the built-in list.
    pub allowed_hosts: Vec<String>,
}

impl Default for UrlConfig {
    fn default() -> Self {
        Self {
            allowed_hosts: DEFAULT_ALLOWED_HOSTS.iter().map(|h| (*h).to_string()).collect(),
        }
    }
}
