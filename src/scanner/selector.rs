use std::path::{Path, PathBuf};

use tracing::info;
use walkdir::WalkDir;

use super::SelectionMode;
use crate::error::{CheckTreeError, Result};
use crate::git::VersionControl;
use crate::path_utils::{contained_slash, relative_slash};

/// Produces the candidate path list for a selection mode.
pub struct SourceSelector<'a> {
    root: PathBuf,
    extensions: Vec<String>,
    exclude_dirs: Vec<String>,
    trunk_branch: String,
    vcs: Option<&'a dyn VersionControl>,
}

impl<'a> SourceSelector<'a> {
    #[must_use]
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            extensions: Vec::new(),
            exclude_dirs: Vec::new(),
            trunk_branch: "master".to_string(),
            vcs: None,
        }
    }

    /// Source extensions to keep (without dot). Empty keeps everything.
    #[must_use]
    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions;
        self
    }

    /// Directory names never descended into during a tree walk.
    #[must_use]
    pub fn with_exclude_dirs(mut self, exclude_dirs: Vec<String>) -> Self {
        self.exclude_dirs = exclude_dirs;
        self
    }

    #[must_use]
    pub fn with_trunk_branch(mut self, trunk: &str) -> Self {
        self.trunk_branch = trunk.to_string();
        self
    }

    #[must_use]
    pub fn with_vcs(mut self, vcs: &'a dyn VersionControl) -> Self {
        self.vcs = Some(vcs);
        self
    }

    /// Candidate paths for `mode`, relative to the root, extension filtered.
    ///
    /// # Errors
    /// Any failed repository query or walk aborts selection; an empty list is
    /// only ever returned when there really is nothing in scope.
    pub fn select(&self, mode: &SelectionMode) -> Result<Vec<String>> {
        let paths = match mode {
            SelectionMode::Explicit(paths) => {
                info!("checking {} explicitly listed path(s)", paths.len());
                let mut files = Vec::with_capacity(paths.len());
                for path in paths {
                    let rel = self.normalize(path)?;
                    if !self.root.join(&rel).is_dir() {
                        files.push(rel);
                    }
                }
                files
            }
            SelectionMode::AllTracked => {
                info!("checking all files under {}", self.root.display());
                self.walk()?
            }
            SelectionMode::Staged => {
                info!("checking files staged for commit");
                self.vcs()?.staged_files()?
            }
            SelectionMode::BranchDiff { base, head } => self.branch_diff(base, head)?,
        };

        Ok(paths
            .into_iter()
            .filter(|p| self.has_source_extension(p))
            .collect())
    }

    /// Explicitly listed paths that are existing directories.
    ///
    /// These join the Directory Set as they are. Every other mode yields none.
    ///
    /// # Errors
    /// Returns a usage error for a path outside the root.
    pub fn explicit_dirs(&self, mode: &SelectionMode) -> Result<Vec<String>> {
        let SelectionMode::Explicit(paths) = mode else {
            return Ok(Vec::new());
        };
        let mut dirs = Vec::new();
        for path in paths {
            let rel = self.normalize(path)?;
            if self.root.join(&rel).is_dir() {
                dirs.push(rel);
            }
        }
        Ok(dirs)
    }

    fn branch_diff(&self, base: &str, head: &str) -> Result<Vec<String>> {
        let vcs = self.vcs()?;
        let branch = vcs.current_branch()?;
        if branch == self.trunk_branch {
            info!(branch = %branch, "on trunk branch, checking all files");
            return self.walk();
        }
        info!(branch = %branch, "checking files changed since {base}...{head}");
        vcs.changed_files(base, head)
    }

    fn vcs(&self) -> Result<&'a dyn VersionControl> {
        self.vcs.ok_or_else(|| {
            CheckTreeError::Git("this selection mode requires a git repository".to_string())
        })
    }

    fn walk(&self) -> Result<Vec<String>> {
        let walker = WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| {
                e.depth() == 0
                    || !(e.file_type().is_dir()
                        && self
                            .exclude_dirs
                            .iter()
                            .any(|d| e.file_name().to_string_lossy() == d.as_str()))
            });

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            if let Some(rel) = relative_slash(&self.root, entry.path()) {
                files.push(rel);
            }
        }
        Ok(files)
    }

    fn normalize(&self, path: &str) -> Result<String> {
        let as_path = Path::new(path);
        let rel = if as_path.is_absolute() {
            relative_slash(&self.root, as_path)
        } else {
            contained_slash(path)
        };
        rel.ok_or_else(|| {
            CheckTreeError::Usage(format!(
                "'{path}' is outside the root directory {}",
                self.root.display()
            ))
        })
    }

    fn has_source_extension(&self, path: &str) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }
}
