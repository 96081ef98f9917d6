//! Include/exclude path filtering for parsed diffs.
//!
//! A file is kept when it matches an include glob (or no include globs are
//! set) and matches no exclude glob. Matching uses [`FileDiff::display_path`]
//! normalized to forward slashes.

use crate::diff::{DiffResult, FileDiff};
use crate::error::{DiffError, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};

/// Compiled include/exclude glob sets.
#[derive(Debug, Clone)]
pub struct PathFilter {
    include: Option<GlobSet>,
    exclude: GlobSet,
}

impl PathFilter {
    /// Compile the given glob patterns.
    ///
    /// # Returns
    ///
    /// * `Ok(PathFilter)` - All patterns compiled
    /// * `Err(DiffError::UserError)` - A pattern is not a valid glob
    pub fn new(include: &[String], exclude: &[String]) -> Result<Self> {
        let include = if include.is_empty() {
            None
        } else {
            Some(build_globset(include, "include_paths")?)
        };

        Ok(Self {
            include,
            exclude: build_globset(exclude, "exclude_paths")?,
        })
    }

    /// A filter that keeps every file.
    pub fn allow_all() -> Self {
        Self {
            include: None,
            exclude: GlobSet::empty(),
        }
    }

    /// Check whether a path passes the filter.
    pub fn allows(&self, path: &str) -> bool {
        let path = normalize_path(path);
        let included = self.include.as_ref().is_none_or(|set| set.is_match(&path));
        included && !self.exclude.is_match(&path)
    }

    /// Keep only the files of `diff` that pass the filter, preserving order.
    pub fn apply(&self, diff: DiffResult) -> DiffResult {
        let files: Vec<FileDiff> = diff
            .files
            .into_iter()
            .filter(|file| self.allows(file.display_path()))
            .collect();
        DiffResult { files }
    }
}

/// Build a GlobSet from a list of glob patterns.
fn build_globset(patterns: &[String], field_name: &str) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();

    for pattern in patterns {
        let normalized_pattern = normalize_path(pattern.trim());
        let glob = Glob::new(&normalized_pattern).map_err(|e| {
            DiffError::UserError(format!(
                "invalid glob pattern in {}: '{}' - {}",
                field_name, pattern, e
            ))
        })?;
        builder.add(glob);
    }

    builder
        .build()
        .map_err(|e| DiffError::UserError(format!("failed to compile {} globs: {}", field_name, e)))
}

/// Normalize a file path to use forward slashes.
fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}
