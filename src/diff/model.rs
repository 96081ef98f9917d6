//! Parsed diff tree.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A whole parsed diff document, one entry per file section in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffResult {
    pub files: Vec<FileDiff>,
}

impl DiffResult {
    /// Number of file sections.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FileDiff> {
        self.files.iter()
    }
}

impl<'a> IntoIterator for &'a DiffResult {
    type Item = &'a FileDiff;
    type IntoIter = std::slice::Iter<'a, FileDiff>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}

/// The changes made to one old/new file pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDiff {
    /// Path after `--- a/`, or empty when that header is missing.
    pub old_path: String,
    /// Path after `+++ b/`, or empty when that header is missing.
    pub new_path: String,
    pub hunks: Vec<Hunk>,
}

impl FileDiff {
    /// The path to show for this file: the new path, or the old one for deletions.
    pub fn display_path(&self) -> &str {
        if self.new_path.is_empty() {
            &self.old_path
        } else {
            &self.new_path
        }
    }

    /// Total added lines across all hunks.
    pub fn additions(&self) -> usize {
        self.hunks.iter().map(Hunk::additions).sum()
    }

    /// Total removed lines across all hunks.
    pub fn deletions(&self) -> usize {
        self.hunks.iter().map(Hunk::deletions).sum()
    }
}

/// One `@@ -o,c +o,c @@` block and the changed lines inside it.
///
/// The four header numbers are copied verbatim; `old_count` and `new_count`
/// are the spans the hunk covers in each file version, not the number of
/// entries in `changed_lines`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hunk {
    pub operation: OperationKind,
    pub old_start: usize,
    pub old_count: usize,
    pub new_start: usize,
    pub new_count: usize,
    pub changed_lines: Vec<ChangedLine>,
}

impl Hunk {
    pub fn additions(&self) -> usize {
        self.changed_lines.iter().filter(|l| !l.is_deletion).count()
    }

    pub fn deletions(&self) -> usize {
        self.changed_lines.iter().filter(|l| l.is_deletion).count()
    }
}

/// An added or removed line. Context lines are never represented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangedLine {
    /// Line text without the `+`/`-` marker, trimmed of surrounding whitespace.
    pub content: String,
    pub is_deletion: bool,
}

impl ChangedLine {
    pub fn added(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_deletion: false,
        }
    }

    pub fn removed(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_deletion: true,
        }
    }
}

/// What a hunk does, derived from its changed lines.
///
/// A hunk with no changed lines at all is reported as `Modified`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperationKind {
    #[serde(rename = "add")]
    Added,
    #[serde(rename = "delete")]
    Deleted,
    #[serde(rename = "modify")]
    Modified,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OperationKind::Added => "add",
            OperationKind::Deleted => "delete",
            OperationKind::Modified => "modify",
        };
        f.write_str(name)
    }
}
