use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use super::VersionControl;
use crate::{CheckTreeError, Result};

type TreeEntries = BTreeMap<String, gix::ObjectId>;

/// Git access backed by gix.
pub struct GitRepo {
    repo_path: PathBuf,
    workdir: PathBuf,
}

impl GitRepo {
    /// Open the repository containing the given path.
    ///
    /// # Errors
    /// Returns an error if no git repository is found.
    pub fn discover(path: &Path) -> Result<Self> {
        let repo = gix::discover(path)
            .map_err(|e| CheckTreeError::GitRepoNotFound(format!("{}: {e}", path.display())))?;
        let workdir = repo
            .workdir()
            .ok_or_else(|| CheckTreeError::Git("Repository has no working directory".into()))?
            .to_path_buf();
        Ok(Self {
            repo_path: repo.path().to_path_buf(),
            workdir,
        })
    }

    /// Get the working directory of the repository.
    #[must_use]
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    fn open_repo(&self) -> Result<gix::Repository> {
        gix::open(&self.repo_path)
            .map_err(|e| CheckTreeError::Git(format!("Failed to open git repository: {e}")))
    }

    fn resolve_commit<'r>(repo: &'r gix::Repository, rev: &str) -> Result<gix::Commit<'r>> {
        repo.rev_parse_single(rev)
            .map_err(|e| CheckTreeError::Git(format!("Failed to parse reference '{rev}': {e}")))?
            .object()
            .map_err(|e| CheckTreeError::Git(format!("Failed to get object for '{rev}': {e}")))?
            .peel_to_commit()
            .map_err(|e| CheckTreeError::Git(format!("Failed to peel to commit '{rev}': {e}")))
    }

    fn commit_entries(commit: &gix::Commit<'_>, what: &str) -> Result<TreeEntries> {
        let tree = commit
            .tree()
            .map_err(|e| CheckTreeError::Git(format!("Failed to get tree for '{what}': {e}")))?;
        let mut entries = TreeEntries::new();
        Self::collect_tree_entries(&tree, "", &mut entries)?;
        Ok(entries)
    }

    fn collect_tree_entries(
        tree: &gix::Tree<'_>,
        prefix: &str,
        entries: &mut TreeEntries,
    ) -> Result<()> {
        for entry in tree.iter() {
            let entry = entry
                .map_err(|e| CheckTreeError::Git(format!("Failed to read tree entry: {e}")))?;
            let name = std::str::from_utf8(entry.filename())
                .map_err(|e| CheckTreeError::Git(format!("Invalid filename encoding: {e}")))?;
            let path = if prefix.is_empty() {
                name.to_string()
            } else {
                format!("{prefix}/{name}")
            };

            match entry.mode().kind() {
                gix::object::tree::EntryKind::Blob
                | gix::object::tree::EntryKind::BlobExecutable => {
                    entries.insert(path, entry.oid().into());
                }
                gix::object::tree::EntryKind::Tree => {
                    let subtree = entry.object().map_err(|e| {
                        CheckTreeError::Git(format!("Failed to get subtree object: {e}"))
                    })?;
                    let subtree = subtree.into_tree();
                    Self::collect_tree_entries(&subtree, &path, entries)?;
                }
                _ => {}
            }
        }
        Ok(())
    }
}

impl VersionControl for GitRepo {
    fn staged_files(&self) -> Result<Vec<String>> {
        let repo = self.open_repo()?;

        let index = repo
            .open_index()
            .map_err(|e| CheckTreeError::Git(format!("Failed to open git index: {e}")))?;

        // A repository without commits has no HEAD tree: everything in the index is added.
        let head_entries = match repo.head_commit() {
            Ok(commit) => Self::commit_entries(&commit, "HEAD")?,
            Err(_) => TreeEntries::new(),
        };

        // Deleted files are absent from the index, so only A/C/M entries can show up here.
        let mut staged = BTreeSet::new();
        for entry in index.entries() {
            let path = String::from_utf8_lossy(entry.path(&index)).to_string();
            let is_staged = head_entries
                .get(&path)
                .is_none_or(|head_oid| *head_oid != entry.id);
            if is_staged {
                staged.insert(path);
            }
        }

        Ok(staged.into_iter().collect())
    }

    fn current_branch(&self) -> Result<String> {
        let repo = self.open_repo()?;
        let head_name = repo
            .head_name()
            .map_err(|e| CheckTreeError::Git(format!("Failed to read HEAD: {e}")))?;
        Ok(head_name.map_or_else(|| "HEAD".to_string(), |name| name.shorten().to_string()))
    }

    fn changed_files(&self, base: &str, head: &str) -> Result<Vec<String>> {
        let repo = self.open_repo()?;

        let base_commit = Self::resolve_commit(&repo, base)?;
        let head_commit = Self::resolve_commit(&repo, head)?;

        let merge_base = repo
            .merge_base(base_commit.id, head_commit.id)
            .map_err(|e| {
                CheckTreeError::Git(format!("Failed to find merge base of '{base}' and '{head}': {e}"))
            })?;
        let merge_base_commit = merge_base
            .object()
            .map_err(|e| CheckTreeError::Git(format!("Failed to get merge base object: {e}")))?
            .peel_to_commit()
            .map_err(|e| CheckTreeError::Git(format!("Failed to peel merge base: {e}")))?;

        let base_entries = Self::commit_entries(&merge_base_commit, base)?;
        let head_entries = Self::commit_entries(&head_commit, head)?;

        let mut changed = BTreeSet::new();

        for (path, oid) in &head_entries {
            if base_entries.get(path) != Some(oid) {
                changed.insert(path.clone());
            }
        }

        // Deleted on the branch: keep only what still exists in the working tree.
        for path in base_entries.keys() {
            if !head_entries.contains_key(path) && self.workdir.join(path).exists() {
                changed.insert(path.clone());
            }
        }

        Ok(changed.into_iter().collect())
    }
}
