//! Unified diff parsing.
//!
//! Turns the text produced by `git diff` into a [`DiffResult`] tree. The
//! pipeline runs strictly forward:
//! - split the text into one segment per `diff --git` section
//! - pull the `--- a/` and `+++ b/` paths out of each segment
//! - locate hunk headers and slice the body each hunk owns
//! - keep only added/removed lines from each body
//! - classify every hunk as added, deleted or modified
//!
//! Parsing is a pure function of its input: no I/O, no shared mutable state.

mod filenames;
mod hunks;
mod lines;
mod model;
mod operation;
mod parser;
mod splitter;


// Re-export public API
pub use model::{ChangedLine, DiffResult, FileDiff, Hunk, OperationKind};
pub use parser::parse;
