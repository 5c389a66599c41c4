mod repo;

pub use repo::GitRepo;

use crate::Result;

/// Read-only view of the version-control state the selector depends on.
///
/// Paths are relative to the repository root and use `/` separators.
pub trait VersionControl {
    /// Files added, copied, or modified in the index relative to `HEAD`.
    ///
    /// # Errors
    /// Returns an error if the index or `HEAD` cannot be read.
    fn staged_files(&self) -> Result<Vec<String>>;

    /// Short name of the checked-out branch, or `"HEAD"` when detached.
    ///
    /// # Errors
    /// Returns an error if `HEAD` cannot be read.
    fn current_branch(&self) -> Result<String>;

    /// Files that differ between the merge base of `base` and `head`, and `head`.
    ///
    /// # Errors
    /// Returns an error if either reference cannot be resolved.
    fn changed_files(&self, base: &str, head: &str) -> Result<Vec<String>>;
}

#[cfg(test)]
#[path = "repo_tests.rs"]
mod tests;
