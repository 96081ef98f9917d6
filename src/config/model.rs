//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Front-end configuration.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output format for `parse`.
    #[serde(default)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[serde(default = "default_true")]
    pub pretty: bool,

    /// Only report files whose path matches one of these globs (empty = all).
    #[serde(default)]
    pub include_paths: Vec<String>,

    /// Never report files whose path matches one of these globs.
    #[serde(default)]
    pub exclude_paths: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            pretty: default_true(),
            include_paths: Vec::new(),
            exclude_paths: Vec::new(),
        }
    }
}
