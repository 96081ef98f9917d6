//! Core diff parsing logic.

use crate::error::Result;
use log::{debug, trace};

use super::filenames::{extract_new_path, extract_old_path};
use super::hunks::{RawHunk, locate_hunks};
use super::lines::classify_lines;
use super::model::{DiffResult, FileDiff, Hunk};
use super::operation::classify_operation;
use super::splitter::split_file_segments;

/// Parse unified diff text into a [`DiffResult`].
///
/// Missing path headers, sections without hunks and empty input all produce
/// empty values rather than errors. The only failure is a hunk header whose
/// numbers cannot be converted, which aborts the whole parse.
///
/// # Arguments
///
/// * `diff` - Raw output of `git diff`, possibly covering many files
///
/// # Returns
///
/// * `Ok(DiffResult)` - One `FileDiff` per `diff --git` section, in order
/// * `Err(DiffError::HeaderIntegerParse)` - A hunk header number did not convert
///
/// # Example
///
/// ```
/// use git_diff_parser::{OperationKind, parse};
///
/// let diff = "diff --git a/a.txt b/a.txt\n--- a/a.txt\n+++ b/a.txt\n@@ -1,0 +1,1 @@\n+hello\n";
/// let result = parse(diff).unwrap();
/// assert_eq!(result.files[0].new_path, "a.txt");
/// assert_eq!(result.files[0].hunks[0].operation, OperationKind::Added);
/// ```
pub fn parse(diff: &str) -> Result<DiffResult> {
    let segments = split_file_segments(diff);
    debug!("found {} file section(s)", segments.len());

    let mut files = Vec::with_capacity(segments.len());
    for segment in segments {
        files.push(parse_file_segment(segment)?);
    }

    Ok(DiffResult { files })
}

fn parse_file_segment(segment: &str) -> Result<FileDiff> {
    let old_path = extract_old_path(segment);
    let new_path = extract_new_path(segment);

    let hunks: Vec<Hunk> = locate_hunks(segment)?
        .into_iter()
        .map(build_hunk)
        .collect();
    debug!("{}: {} hunk(s)", display_name(&old_path, &new_path), hunks.len());

    Ok(FileDiff {
        old_path,
        new_path,
        hunks,
    })
}

fn build_hunk(raw: RawHunk<'_>) -> Hunk {
    let changed_lines = classify_lines(raw.body);
    let operation = classify_operation(&changed_lines);
    trace!(
        "hunk -{},{} +{},{}: {} changed line(s), {}",
        raw.old_start,
        raw.old_count,
        raw.new_start,
        raw.new_count,
        changed_lines.len(),
        operation
    );

    Hunk {
        operation,
        old_start: raw.old_start,
        old_count: raw.old_count,
        new_start: raw.new_start,
        new_count: raw.new_count,
        changed_lines,
    }
}

fn display_name<'a>(old_path: &'a str, new_path: &'a str) -> &'a str {
    match (new_path.is_empty(), old_path.is_empty()) {
        (false, _) => new_path,
        (true, false) => old_path,
        (true, true) => "<unnamed>",
    }
}
