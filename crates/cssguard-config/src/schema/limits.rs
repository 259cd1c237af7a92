//! Input size limits.

use cssguard::config::DEFAULT_MAX_LENGTH;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum stylesheet length in characters (valid range: 1-16777216).
    pub max_length: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}
