use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::output::{ColorMode, OutputFormat};

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "check-tree")]
#[command(author, version, about = "Run code quality tools against the files that matter in a git tree")]
#[command(long_about = "Selects source files from a git working tree (all files, staged files, \
    files changed on the current branch, or an explicit list), drops excluded and ignored \
    paths, and runs external check tools against them.\n\n\
    Exit codes:\n  \
    0 - All tools passed, or nothing to check\n  \
    1 - At least one tool failed or could not run\n  \
    2 - Configuration, usage, or file selection error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress failure reports (exit code only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Repository root to operate in (default: current directory)
    #[arg(short = 'C', long = "root", global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the configured tool table (gofmt, golint, go vet, errcheck, dep status)
    Check(CheckArgs),

    /// Run one aggregate linter against the selected directories
    Lint(LintArgs),
}

/// Options shared by every command that selects files.
#[derive(Args, Debug, Clone, Default)]
pub struct SelectionArgs {
    /// Check every source file in the tree
    #[arg(long, conflicts_with = "staged")]
    pub all: bool,

    /// Check files staged for commit
    #[arg(long, visible_alias = "commit-hook")]
    pub staged: bool,

    /// Ignore-pattern file (gitignore syntax, can be specified multiple times)
    #[arg(long, value_name = "FILE")]
    pub ignore: Vec<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Files to check
    #[arg(value_name = "FILES")]
    pub files: Vec<String>,
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct LintArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// Linter executable (overrides config `lint.exe`)
    #[arg(long)]
    pub exe: Option<String>,

    /// Arguments passed to the linter, after `--`
    #[arg(last = true, value_name = "ARGS")]
    pub linter_args: Vec<String>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
