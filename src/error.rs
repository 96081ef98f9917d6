//! Error types for git-diff-parser.
//!
//! Uses thiserror for derive macros. The parser itself only ever fails with
//! [`DiffError::HeaderIntegerParse`]; every other malformed-input condition
//! (missing path headers, no hunks, empty input) yields empty values instead.

use crate::exit_codes;
use std::fmt;
use std::num::ParseIntError;
use thiserror::Error;

/// One of the four numeric components of a hunk header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderField {
    OldStart,
    OldCount,
    NewStart,
    NewCount,
}

impl fmt::Display for HeaderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HeaderField::OldStart => "old line start",
            HeaderField::OldCount => "old line count",
            HeaderField::NewStart => "new line start",
            HeaderField::NewCount => "new line count",
        };
        f.write_str(name)
    }
}

/// Main error type for git-diff-parser operations.
#[derive(Error, Debug)]
pub enum DiffError {
    /// A hunk header matched structurally but one of its numbers did not convert.
    ///
    /// `hunk_index` is the zero-based position of the hunk within its file section.
    #[error("failed to parse {field} '{value}' in hunk {hunk_index}: {source}")]
    HeaderIntegerParse {
        field: HeaderField,
        hunk_index: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// Bad arguments, unreadable input, or invalid configuration.
    #[error("{0}")]
    UserError(String),
}

impl DiffError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            DiffError::HeaderIntegerParse { .. } => exit_codes::PARSE_FAILURE,
            DiffError::UserError(_) => exit_codes::USER_ERROR,
        }
    }
}

/// Result type alias for git-diff-parser operations.
pub type Result<T> = std::result::Result<T, DiffError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn int_error(text: &str) -> ParseIntError {
        text.parse::<usize>().unwrap_err()
    }

    #[test]
    fn header_error_has_parse_exit_code() {
        let err = DiffError::HeaderIntegerParse {
            field: HeaderField::OldStart,
            hunk_index: 0,
            value: "abc".to_string(),
            source: int_error("abc"),
        };
        assert_eq!(err.exit_code(), exit_codes::PARSE_FAILURE);
    }

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = DiffError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn header_error_message_names_field_and_hunk() {
        let err = DiffError::HeaderIntegerParse {
            field: HeaderField::NewCount,
            hunk_index: 2,
            value: "x1".to_string(),
            source: int_error("x1"),
        };
        assert_eq!(
            err.to_string(),
            "failed to parse new line count 'x1' in hunk 2: invalid digit found in string"
        );
    }
}
