//! Configuration model for the git-diff-parser front end.
//!
//! This module defines the Config struct read from an optional YAML file
//! passed with `--config`. Unknown fields are ignored, every field has a
//! default, and glob patterns are validated on load. The parser itself takes
//! no configuration.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Config;
pub use types::OutputFormat;
