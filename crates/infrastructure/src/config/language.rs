//! Language identification settings.

use serde::{Deserialize, Serialize};

/// Language identification configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageConfig {
    /// Below this many non-whitespace characters detection is skipped and
    /// English is assumed
    #[serde(default = "default_min_detection_chars")]
    pub min_detection_chars: usize,
}

const fn default_min_detection_chars() -> usize {
    20
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            min_detection_chars: default_min_detection_chars(),
        }
    }
}
