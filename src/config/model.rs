use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{CheckTreeError, Result};
use crate::runner::{ToolSpec, builtin_check_tools};

/// Top-level configuration (`.check-tree.toml`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub selection: SelectionConfig,

    #[serde(default)]
    pub tools: ToolsConfig,

    #[serde(default)]
    pub lint: LintConfig,
}

/// Which files are in scope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectionConfig {
    /// Source file extensions, without the dot.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Branch that gets a full check in CI instead of a branch diff.
    #[serde(default = "default_trunk_branch")]
    pub trunk_branch: String,

    /// Top-level directories never checked (and never walked into).
    #[serde(default = "default_exclude_dirs")]
    pub exclude_dirs: Vec<String>,

    /// Ignore-pattern files loaded on every run, relative to the repository root.
    #[serde(default)]
    pub ignore_files: Vec<PathBuf>,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            trunk_branch: default_trunk_branch(),
            exclude_dirs: default_exclude_dirs(),
            ignore_files: Vec::new(),
        }
    }
}

/// Tool table for `check`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToolsConfig {
    /// Prefix put in front of directory arguments other than `.`.
    #[serde(default = "default_package_prefix")]
    pub package_prefix: String,

    /// Tools in run order. Replaces the built-in table when given.
    #[serde(default = "builtin_check_tools")]
    pub check: Vec<ToolSpec>,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            package_prefix: default_package_prefix(),
            check: builtin_check_tools(),
        }
    }
}

/// Aggregate linter used by `lint`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LintConfig {
    #[serde(default = "default_lint_exe")]
    pub exe: String,

    /// Arguments placed before the directory list.
    #[serde(default)]
    pub args: Vec<String>,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            exe: default_lint_exe(),
            args: Vec::new(),
        }
    }
}

fn default_extensions() -> Vec<String> {
    vec!["go".to_string()]
}

fn default_trunk_branch() -> String {
    "master".to_string()
}

fn default_exclude_dirs() -> Vec<String> {
    vec![".git".to_string(), "vendor".to_string()]
}

fn default_package_prefix() -> String {
    "./".to_string()
}

fn default_lint_exe() -> String {
    "gometalinter".to_string()
}

impl Config {
    /// Reject values that parse but cannot drive a run.
    ///
    /// # Errors
    /// Returns a config error naming the first offending value.
    pub fn validate(&self) -> Result<()> {
        if self
            .selection
            .extensions
            .iter()
            .any(|e| e.trim().is_empty())
        {
            return Err(CheckTreeError::Config(
                "selection.extensions must not contain empty entries".to_string(),
            ));
        }
        if self.selection.trunk_branch.trim().is_empty() {
            return Err(CheckTreeError::Config(
                "selection.trunk_branch must not be empty".to_string(),
            ));
        }
        for (i, tool) in self.tools.check.iter().enumerate() {
            if tool.name.trim().is_empty() {
                return Err(CheckTreeError::Config(format!(
                    "tools.check[{i}] has an empty name"
                )));
            }
            if tool.program().is_none_or(|p| p.trim().is_empty()) {
                return Err(CheckTreeError::Config(format!(
                    "tool '{}' has an empty command",
                    tool.name
                )));
            }
        }
        if self.lint.exe.trim().is_empty() {
            return Err(CheckTreeError::Config(
                "lint.exe must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
