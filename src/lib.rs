//! git-diff-parser: typed parsing of unified `git diff` output.
//!
//! The entry point is [`parse`], which turns diff text into a [`DiffResult`]
//! of files, hunks and added/removed lines. The remaining modules support the
//! `git-diff-parser` command-line front end.

pub mod config;
pub mod diff;
pub mod error;
pub mod exit_codes;
pub mod filter;
pub mod render;

pub use diff::{ChangedLine, DiffResult, FileDiff, Hunk, OperationKind, parse};
pub use error::{DiffError, HeaderField};
