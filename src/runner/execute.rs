use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::{CommandRunner, Granularity, ToolSpec, Verdict, interpret};
use crate::scanner::Targets;
use crate::{EXIT_CHECKS_FAILED, EXIT_SUCCESS};

/// Verdict of one configured tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutcome {
    pub name: String,
    pub verdict: Verdict,
    /// The tool was not invoked because its marker file is absent.
    pub skipped: bool,
}

/// Aggregate of all tool outcomes, in declared order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunResult {
    pub outcomes: Vec<ToolOutcome>,
}

impl RunResult {
    /// Number of tools that failed or errored.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.outcomes.iter().map(|o| o.verdict.failure_weight()).sum()
    }

    /// Outcomes that need to be reported to the user.
    pub fn failures(&self) -> impl Iterator<Item = &ToolOutcome> {
        self.outcomes.iter().filter(|o| !o.verdict.is_pass())
    }

    #[must_use]
    pub fn exit_code(&self) -> i32 {
        if self.failure_count() == 0 {
            EXIT_SUCCESS
        } else {
            EXIT_CHECKS_FAILED
        }
    }
}

/// Runs a tool table against a set of targets, one tool at a time.
pub struct ToolRunner<R: CommandRunner> {
    runner: R,
    root: PathBuf,
    package_prefix: String,
}

impl<R: CommandRunner> ToolRunner<R> {
    #[must_use]
    pub fn new(runner: R, root: &Path) -> Self {
        Self {
            runner,
            root: root.to_path_buf(),
            package_prefix: String::new(),
        }
    }

    /// Prefix for directory arguments (`"./"` lets Go tools resolve local packages).
    #[must_use]
    pub fn with_package_prefix(mut self, prefix: &str) -> Self {
        self.package_prefix = prefix.to_string();
        self
    }

    /// Run every tool exactly once, in order. A failing tool never stops the ones after it.
    ///
    /// An empty target set runs nothing and passes.
    #[must_use]
    pub fn run_all(&self, tools: &[ToolSpec], targets: &Targets) -> RunResult {
        if targets.is_empty() {
            info!("nothing to check");
            return RunResult::default();
        }
        let outcomes = tools
            .iter()
            .map(|tool| self.run_tool(tool, targets))
            .collect();
        RunResult { outcomes }
    }

    fn run_tool(&self, tool: &ToolSpec, targets: &Targets) -> ToolOutcome {
        let skip = |reason: &str| {
            info!(tool = %tool.name, "{reason}, skipping");
            ToolOutcome {
                name: tool.name.clone(),
                verdict: Verdict::Pass,
                skipped: true,
            }
        };

        if let Some(marker) = &tool.requires
            && !self.root.join(marker).exists()
        {
            return skip(&format!("marker file {marker} absent"));
        }
        // Only explicitly listed directories were selected.
        if tool.input == Granularity::Files && targets.files.is_empty() {
            return skip("no files to check");
        }

        ToolOutcome {
            name: tool.name.clone(),
            verdict: self.invoke(tool, targets),
            skipped: false,
        }
    }

    fn invoke(&self, tool: &ToolSpec, targets: &Targets) -> Verdict {
        let Some(program) = tool.program() else {
            return Verdict::ExecutionError("empty command".to_string());
        };

        let paths = self.paths_for(tool.input, targets);
        let args = tool.render_args(&paths);
        info!(tool = %tool.name, "running {program} {}", args.join(" "));

        match self.runner.run(program, &args, &self.root) {
            Ok(output) => {
                debug!(tool = %tool.name, status = ?output.status, "tool finished");
                interpret(tool, &output)
            }
            Err(e) => Verdict::ExecutionError(format!("could not execute {program}: {e}")),
        }
    }

    fn paths_for(&self, input: Granularity, targets: &Targets) -> Vec<String> {
        match input {
            Granularity::Files => targets.files.clone(),
            Granularity::Dirs => targets
                .dirs
                .iter()
                .map(|dir| self.prefixed(dir))
                .collect(),
            Granularity::None => Vec::new(),
        }
    }

    fn prefixed(&self, dir: &str) -> String {
        if dir == "." || self.package_prefix.is_empty() {
            dir.to_string()
        } else {
            format!("{}{dir}", self.package_prefix)
        }
    }
}
