use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use indexmap::IndexSet;

use crate::error::{CheckTreeError, Result};
use crate::path_utils::first_segment;

/// Gitignore-style exclusion patterns, matched as a set.
///
/// - `*`, `?` and `[...]` stay within one path segment; `**` spans segments.
/// - A pattern containing `/` is anchored at the repository root (a leading
///   `/` is dropped); a pattern without one matches at any depth.
/// - A trailing `/` matches directories only.
/// - A path is ignored when it, or any directory above it, matches.
#[derive(Debug, Clone)]
pub struct IgnoreSet {
    patterns: IndexSet<String>,
    any: GlobSet,
    dirs_only: GlobSet,
}

impl Default for IgnoreSet {
    fn default() -> Self {
        Self {
            patterns: IndexSet::new(),
            any: GlobSet::empty(),
            dirs_only: GlobSet::empty(),
        }
    }
}

impl IgnoreSet {
    /// Compile a set of patterns.
    ///
    /// # Errors
    /// Returns an error if any pattern is not a valid glob.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let patterns: IndexSet<String> = patterns
            .iter()
            .map(|p| p.as_ref().trim().to_string())
            .filter(|p| !p.is_empty())
            .collect();

        let mut any = GlobSetBuilder::new();
        let mut dirs_only = GlobSetBuilder::new();
        for pattern in &patterns {
            let (glob, dir_only) = translate(pattern);
            let compiled = GlobBuilder::new(&glob)
                .literal_separator(true)
                .build()
                .map_err(|e| CheckTreeError::InvalidPattern {
                    pattern: pattern.clone(),
                    source: e,
                })?;
            if dir_only {
                dirs_only.add(compiled);
            } else {
                any.add(compiled);
            }
        }

        Ok(Self {
            patterns,
            any: build_set(&any)?,
            dirs_only: build_set(&dirs_only)?,
        })
    }

    /// Load patterns from pattern files, one glob per line.
    ///
    /// Blank lines and `#` comments are skipped; surrounding whitespace is trimmed.
    ///
    /// # Errors
    /// Returns an error if a file cannot be read or holds an invalid pattern.
    pub fn from_files(files: &[PathBuf]) -> Result<Self> {
        let mut patterns = Vec::new();
        for file in files {
            patterns.extend(read_pattern_file(file)?);
        }
        Self::new(&patterns)
    }

    /// Patterns in load order, deduplicated.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Whether a normalized relative path is excluded.
    #[must_use]
    pub fn is_ignored(&self, path: &str) -> bool {
        if self.is_empty() {
            return false;
        }
        if self.any.is_match(path) {
            return true;
        }
        ancestors(path).any(|dir| self.any.is_match(dir) || self.dirs_only.is_match(dir))
    }
}

fn translate(pattern: &str) -> (String, bool) {
    let dir_only = pattern.ends_with('/');
    let body = pattern.trim_end_matches('/');
    let anchored = body.contains('/');
    let body = body.trim_start_matches('/');
    let glob = if anchored || body.starts_with("**") {
        body.to_string()
    } else {
        format!("**/{body}")
    };
    (glob, dir_only)
}

fn build_set(builder: &GlobSetBuilder) -> Result<GlobSet> {
    builder.build().map_err(|e| CheckTreeError::InvalidPattern {
        pattern: "combined patterns".to_string(),
        source: e,
    })
}

/// Proper ancestor directories of a relative path, shortest first.
fn ancestors(path: &str) -> impl Iterator<Item = &str> {
    path.match_indices('/').map(move |(pos, _)| &path[..pos])
}

fn read_pattern_file(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|source| CheckTreeError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect())
}

/// Drops paths under excluded top-level trees and paths matching the ignore set.
#[derive(Debug, Clone, Default)]
pub struct PathFilter {
    exclude_dirs: Vec<String>,
    ignore: IgnoreSet,
}

impl PathFilter {
    #[must_use]
    pub const fn new(exclude_dirs: Vec<String>, ignore: IgnoreSet) -> Self {
        Self {
            exclude_dirs,
            ignore,
        }
    }

    #[must_use]
    pub fn should_include(&self, path: &str) -> bool {
        let top = first_segment(path);
        !self.exclude_dirs.iter().any(|d| d == top) && !self.ignore.is_ignored(path)
    }

    /// Keep the paths that pass, preserving order.
    #[must_use]
    pub fn apply(&self, paths: Vec<String>) -> Vec<String> {
        paths.into_iter().filter(|p| self.should_include(p)).collect()
    }
}
