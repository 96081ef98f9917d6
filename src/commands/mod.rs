//! Command implementations for git-diff-parser.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Every command reads one diff, parses it with
//! [`git_diff_parser::parse`], applies the configured path filter and
//! prints the result to stdout.

use crate::cli::{Command, InputArgs, ParseArgs, SummaryArgs};
use git_diff_parser::config::{Config, OutputFormat};
use git_diff_parser::error::{DiffError, Result};
use git_diff_parser::render::{render_summary, render_tree};
use git_diff_parser::{DiffResult, parse};
use log::{debug, info};
use std::io::Read;
use std::path::Path;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Parse(args) => cmd_parse(args),
        Command::Summary(args) => cmd_summary(args),
    }
}

fn cmd_parse(args: ParseArgs) -> Result<()> {
    let mut config = resolve_config(&args.input)?;
    if let Some(format) = &args.format {
        config.format = OutputFormat::from_str(format).ok_or_else(|| {
            DiffError::UserError(format!(
                "unknown output format '{}'. Use 'json' or 'yaml'.",
                format
            ))
        })?;
    }
    if args.compact {
        config.pretty = false;
    }

    let diff = load_diff(&args.input, &config)?;
    let rendered = render_tree(&diff, config.format, config.pretty)?;
    println!("{}", rendered.trim_end());
    Ok(())
}

fn cmd_summary(args: SummaryArgs) -> Result<()> {
    let config = resolve_config(&args.input)?;
    let diff = load_diff(&args.input, &config)?;
    print!("{}", render_summary(&diff));
    Ok(())
}

/// Load the config file (if any) and apply command-line overrides.
///
/// `--include` replaces the configured include globs; `--exclude` adds to
/// the configured exclude globs.
fn resolve_config(args: &InputArgs) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    if !args.include.is_empty() {
        config.include_paths = args.include.clone();
    }
    config.exclude_paths.extend(args.exclude.iter().cloned());

    config.validate()?;
    Ok(config)
}

/// Read, parse and filter the diff named by `args`.
fn load_diff(args: &InputArgs, config: &Config) -> Result<DiffResult> {
    let text = read_input(args.input.as_deref())?;
    let diff = parse(&text)?;
    let total = diff.len();

    let diff = config.path_filter()?.apply(diff);
    info!("parsed {} file(s), {} after filtering", total, diff.len());
    Ok(diff)
}

/// Read diff text from a file, or from stdin when `path` is `None` or `-`.
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => {
            debug!("reading diff from {}", path.display());
            std::fs::read_to_string(path).map_err(|e| {
                DiffError::UserError(format!(
                    "failed to read diff file '{}': {}",
                    path.display(),
                    e
                ))
            })
        }
        _ => {
            debug!("reading diff from stdin");
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| DiffError::UserError(format!("failed to read stdin: {}", e)))?;
            Ok(text)
        }
    }
}

#[cfg(test)]
mod tests;
