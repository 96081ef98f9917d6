//! Exit code constants for the git-diff-parser CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable input, invalid config)
//! - 2: Diff parse failure (malformed hunk header numbers)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable input, or invalid configuration.
pub const USER_ERROR: i32 = 1;

/// The diff contained a hunk header whose numbers could not be parsed.
pub const PARSE_FAILURE: i32 = 2;
