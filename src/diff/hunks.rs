//! Hunk header location and body slicing.

use crate::error::{DiffError, HeaderField, Result};
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Matches `@@ -O,C +O,C @@` at the start of a line.
///
/// Each number is captured as a loose token and converted afterwards, so a
/// header with non-numeric text in one position is reported as an error
/// rather than skipped. The implicit-count form `@@ -O +O @@` never matches.
static HUNK_HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*@@ -([^,\s]+),(\S+) \+([^,\s]+),(\S+) @@")
        .expect("Invalid hunk header regex")
});

/// A located hunk before line classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct RawHunk<'a> {
    pub old_start: usize,
    pub old_count: usize,
    pub new_start: usize,
    pub new_count: usize,
    /// Text from the end of the header match up to the next header or the
    /// end of the segment. Includes any trailing header context.
    pub body: &'a str,
}

/// Find every hunk in a file segment, in order of appearance.
///
/// # Returns
///
/// * `Ok(Vec<RawHunk>)` - Located hunks (empty if the segment has none)
/// * `Err(DiffError::HeaderIntegerParse)` - A header number did not convert
pub(super) fn locate_hunks(segment: &str) -> Result<Vec<RawHunk<'_>>> {
    let headers: Vec<Captures<'_>> = HUNK_HEADER_REGEX.captures_iter(segment).collect();
    let mut hunks = Vec::with_capacity(headers.len());

    for (hunk_index, caps) in headers.iter().enumerate() {
        let Some(header) = caps.get(0) else {
            continue;
        };
        let body_end = headers
            .get(hunk_index + 1)
            .and_then(|next| next.get(0))
            .map_or(segment.len(), |next| next.start());

        hunks.push(RawHunk {
            old_start: header_number(caps, 1, HeaderField::OldStart, hunk_index)?,
            old_count: header_number(caps, 2, HeaderField::OldCount, hunk_index)?,
            new_start: header_number(caps, 3, HeaderField::NewStart, hunk_index)?,
            new_count: header_number(caps, 4, HeaderField::NewCount, hunk_index)?,
            body: &segment[header.end()..body_end],
        });
    }

    Ok(hunks)
}

fn header_number(
    caps: &Captures<'_>,
    group: usize,
    field: HeaderField,
    hunk_index: usize,
) -> Result<usize> {
    let value = caps.get(group).map_or("", |m| m.as_str());
    value
        .parse::<usize>()
        .map_err(|source| DiffError::HeaderIntegerParse {
            field,
            hunk_index,
            value: value.to_string(),
            source,
        })
}
