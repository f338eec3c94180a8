use serde::{Deserialize, Serialize};

use super::defaults;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    pub max_patterns: usize,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            max_patterns: defaults::DEFAULT_MAX_PATTERNS,
        }
    }
}
