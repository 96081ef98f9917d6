//! Hunk operation classification.

use super::model::{ChangedLine, OperationKind};

/// Derive what a hunk does from its changed lines.
///
/// Mixed additions and deletions are `Modified`. A hunk with no changed
/// lines also reports `Modified`; there is no separate "unknown" kind.
pub(super) fn classify_operation(lines: &[ChangedLine]) -> OperationKind {
    let mut has_additions = false;
    let mut has_deletions = false;

    for line in lines {
        if line.is_deletion {
            has_deletions = true;
        } else {
            has_additions = true;
        }

        if has_additions && has_deletions {
            return OperationKind::Modified;
        }
    }

    match (has_additions, has_deletions) {
        (true, false) => OperationKind::Added,
        (false, true) => OperationKind::Deleted,
        _ => OperationKind::Modified,
    }
}
