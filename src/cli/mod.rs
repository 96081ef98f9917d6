//! CLI argument parsing for git-diff-parser.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// git-diff-parser: turn unified `git diff` output into structured data.
///
/// Reads a diff from a file or stdin and reports every file, hunk and
/// added/removed line it contains.
#[derive(Parser, Debug)]
#[command(name = "git-diff-parser")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). Logs go to stderr.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for git-diff-parser.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the parsed diff tree.
    ///
    /// Emits files, hunks and changed lines as JSON (default) or YAML.
    Parse(ParseArgs),

    /// Print a per-file summary of additions, deletions and hunk kinds.
    Summary(SummaryArgs),
}

/// Input and filtering options shared by every command.
#[derive(Args, Debug)]
pub struct InputArgs {
    /// Diff file to read. Omit or pass `-` to read stdin.
    pub input: Option<PathBuf>,

    /// YAML config file with output and filter defaults.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Only report files matching these globs (replaces config include_paths).
    #[arg(long, value_delimiter = ',')]
    pub include: Vec<String>,

    /// Skip files matching these globs (added to config exclude_paths).
    #[arg(long, value_delimiter = ',')]
    pub exclude: Vec<String>,
}

/// Arguments for the `parse` command.
#[derive(Args, Debug)]
pub struct ParseArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format (json, yaml). Defaults to the config value.
    #[arg(short, long)]
    pub format: Option<String>,

    /// Emit single-line JSON instead of pretty-printed JSON.
    #[arg(long)]
    pub compact: bool,
}

/// Arguments for the `summary` command.
#[derive(Args, Debug)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
