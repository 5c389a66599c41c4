use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::cli::{Cli, SelectionArgs};
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::error::{CheckTreeError, Result};
use crate::git::GitRepo;
use crate::output::ReportWriter;
use crate::runner::RunResult;
use crate::scanner::{
    IgnoreSet, PathFilter, SelectionMode, SelectionRequest, SourceSelector, Targets,
    reduce_with_dirs,
};

/// Everything a command needs once file selection is done.
#[derive(Debug)]
pub struct RunContext {
    /// Directory the tools run in. Target paths are relative to it.
    pub root: PathBuf,
    pub config: Config,
    pub targets: Targets,
}

impl RunContext {
    /// Load configuration and select, filter, and reduce the target files.
    ///
    /// # Errors
    /// Returns an error for usage mistakes, unreadable config or ignore files,
    /// invalid ignore patterns, and failed repository queries.
    pub fn prepare(cli: &Cli, selection: &SelectionArgs, in_ci: bool) -> Result<Self> {
        let root = resolve_root(cli.root.as_deref())?;
        let config = load_config(&root, selection.config.as_deref(), cli.no_config)?;

        let request = SelectionRequest {
            all: selection.all,
            staged: selection.staged,
            files: selection.files.clone(),
            in_ci,
        };
        let mode = request.resolve(&config.selection.trunk_branch)?;
        debug!(?mode, "resolved selection mode");

        let ignore = load_ignore_set(&root, &config, &selection.ignore)?;

        let repo = match &mode {
            SelectionMode::Explicit(_) => None,
            // Walk the whole working tree, the same tree a CI run on trunk walks.
            SelectionMode::AllTracked => GitRepo::discover(&root)
                .inspect_err(|e| debug!("not in a git repository, walking {}: {e}", root.display()))
                .ok(),
            SelectionMode::Staged | SelectionMode::BranchDiff { .. } => {
                Some(GitRepo::discover(&root)?)
            }
        };
        // Paths reported by git are relative to the working tree root.
        let root = match &repo {
            Some(repo) => dunce::canonicalize(repo.workdir()).map_err(|source| {
                CheckTreeError::FileAccess {
                    path: repo.workdir().to_path_buf(),
                    source,
                }
            })?,
            None => root,
        };

        let mut selector = SourceSelector::new(&root)
            .with_extensions(config.selection.extensions.clone())
            .with_exclude_dirs(config.selection.exclude_dirs.clone())
            .with_trunk_branch(&config.selection.trunk_branch);
        if let Some(repo) = &repo {
            selector = selector.with_vcs(repo);
        }

        let candidates = selector.select(&mode)?;
        let listed_dirs = selector.explicit_dirs(&mode)?;
        let candidate_count = candidates.len();
        let filter = PathFilter::new(config.selection.exclude_dirs.clone(), ignore);
        let filtered = filter.apply(candidates);
        let dirs = filter.apply(listed_dirs);
        info!(
            candidates = candidate_count,
            kept = filtered.len(),
            dirs = dirs.len(),
            "filtered candidate paths"
        );

        let targets = reduce_with_dirs(&filtered, &dirs);
        debug!(dirs = ?targets.dirs, "directory set");

        Ok(Self {
            root,
            config,
            targets,
        })
    }
}

fn resolve_root(root: Option<&Path>) -> Result<PathBuf> {
    let dir = match root {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir()?,
    };
    dunce::canonicalize(&dir).map_err(|source| CheckTreeError::FileAccess { path: dir, source })
}

fn load_config(root: &Path, config_path: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new(root);
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// Config ignore files are relative to the root; `--ignore` files are taken as given.
fn load_ignore_set(root: &Path, config: &Config, cli_files: &[PathBuf]) -> Result<IgnoreSet> {
    let files: Vec<PathBuf> = config
        .selection
        .ignore_files
        .iter()
        .map(|f| root.join(f))
        .chain(cli_files.iter().cloned())
        .collect();
    let ignore = IgnoreSet::from_files(&files)?;
    debug!(patterns = ?ignore.patterns().collect::<Vec<_>>(), "loaded ignore patterns");
    Ok(ignore)
}

/// Print the failure blocks of a run to stderr, unless `--quiet`.
///
/// A failed write is logged; the run's verdict stands either way.
pub(crate) fn report_failures(cli: &Cli, result: &RunResult) {
    if cli.quiet {
        return;
    }
    let writer = ReportWriter::new(cli.color.into());
    write_failures(&writer, &mut std::io::stderr().lock(), result);
}

/// Returns whether the whole report was written.
pub(crate) fn write_failures<W: Write>(writer: &ReportWriter, w: &mut W, result: &RunResult) -> bool {
    match writer.write_result(w, result).and_then(|()| w.flush()) {
        Ok(()) => true,
        Err(e) => {
            warn!("could not write failure report: {e}");
            false
        }
    }
}

/// Write a machine-readable summary to stdout. A failed write is logged.
pub(crate) fn print_summary(summary: &str) {
    let mut stdout = std::io::stdout().lock();
    if let Err(e) = writeln!(stdout, "{summary}").and_then(|()| stdout.flush()) {
        warn!("could not write summary: {e}");
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
