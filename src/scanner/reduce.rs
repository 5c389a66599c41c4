use std::collections::BTreeSet;

use crate::path_utils::parent_dir;

/// Filtered paths at both granularities the tools consume.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Targets {
    /// Deduplicated, sorted file paths.
    pub files: Vec<String>,
    /// Deduplicated, sorted containing directories (the Directory Set).
    pub dirs: Vec<String>,
}

impl Targets {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.files.is_empty() && self.dirs.is_empty()
    }
}

/// Reduce a filtered file list to sorted unique files and their directories.
#[must_use]
pub fn reduce<S: AsRef<str>>(files: &[S]) -> Targets {
    reduce_with_dirs(files, &[] as &[&str])
}

/// Like [`reduce`], with extra directories that join the Directory Set directly.
#[must_use]
pub fn reduce_with_dirs<S: AsRef<str>, D: AsRef<str>>(files: &[S], extra_dirs: &[D]) -> Targets {
    let files: BTreeSet<&str> = files.iter().map(AsRef::as_ref).collect();
    let dirs: BTreeSet<&str> = files
        .iter()
        .map(|&f| parent_dir(f))
        .chain(extra_dirs.iter().map(AsRef::as_ref))
        .collect();
    Targets {
        files: files.into_iter().map(String::from).collect(),
        dirs: dirs.into_iter().map(String::from).collect(),
    }
}
