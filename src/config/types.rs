//! Configuration types and defaults.

use serde::{Deserialize, Serialize};

/// How `parse` renders the diff tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON document (default).
    #[default]
    Json,
    /// YAML document.
    Yaml,
}

impl OutputFormat {
    /// Parse an output format from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

// Default value functions for serde
pub(crate) fn default_true() -> bool {
    true
}
