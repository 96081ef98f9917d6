//! Rendering of parsed diffs for the command-line front end.

use crate::config::OutputFormat;
use crate::diff::{DiffResult, FileDiff, OperationKind};
use crate::error::{DiffError, Result};

/// Serialize the whole tree as JSON or YAML.
pub fn render_tree(diff: &DiffResult, format: OutputFormat, pretty: bool) -> Result<String> {
    let rendered = match format {
        OutputFormat::Json if pretty => serde_json::to_string_pretty(diff)
            .map_err(|e| DiffError::UserError(format!("failed to serialize diff to JSON: {}", e)))?,
        OutputFormat::Json => serde_json::to_string(diff)
            .map_err(|e| DiffError::UserError(format!("failed to serialize diff to JSON: {}", e)))?,
        OutputFormat::Yaml => serde_yaml::to_string(diff)
            .map_err(|e| DiffError::UserError(format!("failed to serialize diff to YAML: {}", e)))?,
    };
    Ok(rendered)
}

/// Per-operation hunk counts for one file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct OperationCounts {
    added: usize,
    deleted: usize,
    modified: usize,
}

impl OperationCounts {
    fn of(file: &FileDiff) -> Self {
        let mut counts = Self::default();
        for hunk in &file.hunks {
            match hunk.operation {
                OperationKind::Added => counts.added += 1,
                OperationKind::Deleted => counts.deleted += 1,
                OperationKind::Modified => counts.modified += 1,
            }
        }
        counts
    }
}

/// Format a human-readable per-file summary.
///
/// ```text
/// src/lib.rs  +3 -1  (2 hunks: 1 add, 0 delete, 1 modify)
///
/// 1 file changed, 3 additions, 1 deletion
/// ```
pub fn render_summary(diff: &DiffResult) -> String {
    let mut out = String::new();
    let mut total_additions = 0;
    let mut total_deletions = 0;

    for file in diff {
        let additions = file.additions();
        let deletions = file.deletions();
        let counts = OperationCounts::of(file);
        total_additions += additions;
        total_deletions += deletions;

        out.push_str(&format!(
            "{}  +{} -{}  ({}: {} add, {} delete, {} modify)\n",
            file.display_path(),
            additions,
            deletions,
            plural(file.hunks.len(), "hunk", "hunks"),
            counts.added,
            counts.deleted,
            counts.modified
        ));
    }

    if !diff.is_empty() {
        out.push('\n');
    }
    out.push_str(&format!(
        "{} changed, {}, {}\n",
        plural(diff.len(), "file", "files"),
        plural(total_additions, "addition", "additions"),
        plural(total_deletions, "deletion", "deletions")
    ));

    out
}

fn plural(count: usize, one: &str, many: &str) -> String {
    if count == 1 {
        format!("{} {}", count, one)
    } else {
        format!("{} {}", count, many)
    }
}
