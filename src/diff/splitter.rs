//! Splitting a multi-file diff into per-file segments.

/// Literal token that opens every file section of a git diff.
pub(super) const FILE_SEPARATOR: &str = "diff --git";

/// Split raw diff text into one segment per file section.
///
/// Each segment starts with [`FILE_SEPARATOR`] and runs up to the next
/// occurrence or the end of the input. Anything before the first separator
/// is discarded, so input without a separator yields no segments.
pub(super) fn split_file_segments(diff: &str) -> Vec<&str> {
    let starts: Vec<usize> = diff
        .match_indices(FILE_SEPARATOR)
        .map(|(idx, _)| idx)
        .collect();

    starts
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let end = starts.get(i + 1).copied().unwrap_or(diff.len());
            &diff[start..end]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_separator_yields_no_segments() {
        assert!(split_file_segments("").is_empty());
        assert!(split_file_segments("just some text\n+not a diff\n").is_empty());
    }

    #[test]
    fn preamble_is_discarded() {
        let text = "commit abc\nAuthor: x\n\ndiff --git a/f b/f\n+x\n";
        let segments = split_file_segments(text);

        assert_eq!(segments, vec!["diff --git a/f b/f\n+x\n"]);
    }

    #[test]
    fn segments_keep_input_order() {
        let text = "diff --git a/one b/one\n+1\ndiff --git a/two b/two\n-2\n";
        let segments = split_file_segments(text);

        assert_eq!(segments.len(), 2);
        assert!(segments[0].starts_with("diff --git a/one"));
        assert!(segments[0].ends_with("+1\n"));
        assert!(segments[1].starts_with("diff --git a/two"));
    }
}
