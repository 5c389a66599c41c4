use crate::{CheckTreeError, Result};

/// Strategy that decides which files are in scope for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionMode {
    /// Exactly these paths.
    Explicit(Vec<String>),
    /// Every source file in the working tree.
    AllTracked,
    /// Files added, copied, or modified in the index.
    Staged,
    /// Files changed on `head` since it diverged from `base`.
    BranchDiff { base: String, head: String },
}

impl SelectionMode {
    /// Whether selecting under this mode has to query version control.
    #[must_use]
    pub const fn needs_vcs(&self) -> bool {
        matches!(self, Self::Staged | Self::BranchDiff { .. })
    }
}

/// Raw selection inputs as they arrive from the command line and environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionRequest {
    pub all: bool,
    pub staged: bool,
    pub files: Vec<String>,
    /// Running under CI (the `CI` environment variable is set).
    pub in_ci: bool,
}

impl SelectionRequest {
    /// Turn the request into exactly one mode.
    ///
    /// Without flags or files, CI runs check the current branch against
    /// `trunk`; elsewhere that is a usage error.
    ///
    /// # Errors
    /// Returns a usage error when the inputs name more than one mode, or none
    /// outside CI.
    pub fn resolve(&self, trunk: &str) -> Result<SelectionMode> {
        if self.all && self.staged {
            return Err(CheckTreeError::Usage(
                "cannot pass both --all and --staged".to_string(),
            ));
        }
        if !self.files.is_empty() && (self.all || self.staged) {
            return Err(CheckTreeError::Usage(
                "cannot combine --all or --staged with a list of files".to_string(),
            ));
        }

        if self.all {
            Ok(SelectionMode::AllTracked)
        } else if self.staged {
            Ok(SelectionMode::Staged)
        } else if !self.files.is_empty() {
            Ok(SelectionMode::Explicit(self.files.clone()))
        } else if self.in_ci {
            Ok(SelectionMode::BranchDiff {
                base: trunk.to_string(),
                head: "HEAD".to_string(),
            })
        } else {
            Err(CheckTreeError::Usage(
                "outside a CI system you must pass --all, --staged, or a list of files"
                    .to_string(),
            ))
        }
    }
}

/// Whether the `CI` environment variable marks this process as a CI run.
#[must_use]
pub fn ci_from_env() -> bool {
    std::env::var_os("CI").is_some_and(|v| !v.is_empty())
}
