//! Tests for command helpers.

use super::*;
use std::io::Write;
use tempfile::NamedTempFile;

const DIFF: &str = r#"diff --git a/src/lib.rs b/src/lib.rs
--- a/src/lib.rs
+++ b/src/lib.rs
@@ -1,1 +1,2 @@
 mod a;
+mod b;
diff --git a/Cargo.lock b/Cargo.lock
--- a/Cargo.lock
+++ b/Cargo.lock
@@ -5,1 +5,1 @@
-version = "1"
+version = "2"
"#;

fn input_args(input: Option<&Path>, config: Option<&Path>) -> InputArgs {
    InputArgs {
        input: input.map(Path::to_path_buf),
        config: config.map(Path::to_path_buf),
        include: Vec::new(),
        exclude: Vec::new(),
    }
}

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_resolve_config_defaults_without_file() {
    let config = resolve_config(&input_args(None, None)).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_resolve_config_flags_override_file() {
    let config_file = write_temp("include_paths: [\"docs/**\"]\nexclude_paths: [\"*.tmp\"]\n");
    let mut args = input_args(None, Some(config_file.path()));
    args.include = vec!["src/**".to_string()];
    args.exclude = vec!["*.lock".to_string()];

    let config = resolve_config(&args).unwrap();

    assert_eq!(config.include_paths, vec!["src/**".to_string()]);
    assert_eq!(
        config.exclude_paths,
        vec!["*.tmp".to_string(), "*.lock".to_string()]
    );
}

#[test]
fn test_resolve_config_rejects_bad_flag_glob() {
    let mut args = input_args(None, None);
    args.exclude = vec!["[oops".to_string()];

    let err = resolve_config(&args).unwrap_err();
    assert!(matches!(err, DiffError::UserError(_)));
}

#[test]
fn test_load_diff_applies_filter() {
    let diff_file = write_temp(DIFF);
    let mut args = input_args(Some(diff_file.path()), None);
    args.exclude = vec!["*.lock".to_string()];
    let config = resolve_config(&args).unwrap();

    let diff = load_diff(&args, &config).unwrap();

    assert_eq!(diff.len(), 1);
    assert_eq!(diff.files[0].new_path, "src/lib.rs");
}

#[test]
fn test_load_diff_propagates_parse_error() {
    let diff_file = write_temp("diff --git a/x b/x\n--- a/x\n+++ b/x\n@@ -1,q +1,1 @@\n+x\n");
    let args = input_args(Some(diff_file.path()), None);

    let err = load_diff(&args, &Config::default()).unwrap_err();

    assert!(matches!(err, DiffError::HeaderIntegerParse { .. }));
    assert_eq!(err.exit_code(), git_diff_parser::exit_codes::PARSE_FAILURE);
}

#[test]
fn test_read_input_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.diff");

    let err = read_input(Some(&missing)).unwrap_err();

    assert!(err.to_string().contains("failed to read diff file"));
    assert_eq!(err.exit_code(), git_diff_parser::exit_codes::USER_ERROR);
}
