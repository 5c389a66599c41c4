use std::path::Path;

use clap::Parser;
use tempfile::TempDir;

use super::*;
use crate::cli::Commands;
use crate::{EXIT_CHECKS_FAILED, EXIT_SUCCESS};

fn go_tree(config: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("pkg")).unwrap();
    std::fs::write(dir.path().join("main.go"), "package main\n").unwrap();
    std::fs::write(dir.path().join("pkg/util.go"), "package pkg\n").unwrap();
    std::fs::write(dir.path().join(".check-tree.toml"), config).unwrap();
    dir
}

fn run(dir: &Path, args: &[&str]) -> Result<i32> {
    let root = dir.to_string_lossy().to_string();
    let mut argv = vec!["check-tree", "-q", "-C", root.as_str(), "lint"];
    argv.extend_from_slice(args);
    let cli = Cli::parse_from(argv);
    let Commands::Lint(lint) = &cli.command else {
        panic!("Expected Lint command");
    };
    run_lint_impl(lint, &cli, false)
}

#[test]
fn exe_flag_overrides_config() {
    let dir = go_tree("[lint]\nexe = \"check-tree-no-such-linter\"\n");
    assert_eq!(run(dir.path(), &["--all", "--exe", "true"]).unwrap(), EXIT_SUCCESS);
}

#[test]
fn linter_exit_one_is_failure() {
    let dir = go_tree("[lint]\nexe = \"false\"\n");
    assert_eq!(run(dir.path(), &["--all"]).unwrap(), EXIT_CHECKS_FAILED);
}

#[test]
fn passthrough_args_precede_directories() {
    let dir = go_tree("[lint]\nexe = \"sh\"\n");
    let code = run(
        dir.path(),
        &[
            "--all",
            "--",
            "-c",
            "test \"$*\" = '. ./pkg' || exit 1",
            "sh",
        ],
    )
    .unwrap();
    assert_eq!(code, EXIT_SUCCESS);
}

#[test]
fn config_args_used_without_passthrough() {
    let dir = go_tree("[lint]\nexe = \"sh\"\nargs = [\"-c\", \"exit 1\", \"sh\"]\n");
    assert_eq!(run(dir.path(), &["--all"]).unwrap(), EXIT_CHECKS_FAILED);
}
