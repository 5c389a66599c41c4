use std::path::Path;

use clap::Parser;
use tempfile::TempDir;

use super::*;
use crate::cli::Commands;
use crate::{EXIT_CHECKS_FAILED, EXIT_SUCCESS};

fn create_file(dir: &Path, name: &str, content: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
}

fn run(dir: &Path, args: &[&str]) -> Result<i32> {
    let root = dir.to_string_lossy().to_string();
    let mut argv = vec!["check-tree", "-q", "-C", root.as_str(), "check"];
    argv.extend_from_slice(args);
    let cli = Cli::parse_from(argv);
    let Commands::Check(check) = &cli.command else {
        panic!("Expected Check command");
    };
    run_check_impl(check, &cli, false)
}

fn tree_with_tools(tools: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    create_file(dir.path(), "main.go", "package main\n");
    create_file(dir.path(), "pkg/util.go", "package pkg\n");
    create_file(dir.path(), ".check-tree.toml", tools);
    dir
}

#[test]
fn passing_tools_exit_zero() {
    let dir = tree_with_tools(
        r#"
[[tools.check]]
name = "quiet"
command = ["sh", "-c", "exit 0", "sh"]
signal = "output"
"#,
    );
    assert_eq!(run(dir.path(), &["--all"]).unwrap(), EXIT_SUCCESS);
}

#[test]
fn one_failing_tool_exits_one() {
    let dir = tree_with_tools(
        r#"
[[tools.check]]
name = "golint"
command = ["sh", "-c", "echo 'line 3: unused var'", "sh"]
signal = "output"

[[tools.check]]
name = "vet"
command = ["sh", "-c", "exit 0", "sh"]
"#,
    );
    assert_eq!(run(dir.path(), &["--all"]).unwrap(), EXIT_CHECKS_FAILED);
}

#[test]
fn tool_that_cannot_start_exits_one() {
    let dir = tree_with_tools(
        r#"
[[tools.check]]
name = "missing"
command = ["check-tree-no-such-tool"]
"#,
    );
    assert_eq!(run(dir.path(), &["--all"]).unwrap(), EXIT_CHECKS_FAILED);
}

#[test]
fn nothing_selected_exits_zero_without_running_tools() {
    let dir = tree_with_tools(
        r#"
[[tools.check]]
name = "always-fails"
command = ["sh", "-c", "exit 1", "sh"]
"#,
    );
    assert_eq!(run(dir.path(), &["README.md"]).unwrap(), EXIT_SUCCESS);
}

#[test]
fn tools_receive_prefixed_directories() {
    let dir = tree_with_tools(
        r#"
[[tools.check]]
name = "args"
command = ["sh", "-c", "test \"$*\" = '. ./pkg' || exit 1", "sh"]
"#,
    );
    assert_eq!(run(dir.path(), &["--all"]).unwrap(), EXIT_SUCCESS);
}

#[test]
fn usage_error_propagates() {
    let dir = tree_with_tools("");
    assert!(matches!(run(dir.path(), &[]), Err(crate::CheckTreeError::Usage(_))));
}
