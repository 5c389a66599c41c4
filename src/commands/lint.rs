use crate::cli::{Cli, LintArgs};
use crate::error::Result;
use crate::output::ErrorOutput;
use crate::runner::{ProcessRunner, ToolRunner, aggregate_linter};
use crate::scanner::ci_from_env;
use crate::EXIT_CONFIG_ERROR;

use super::context::{RunContext, report_failures};

#[must_use]
pub fn run_lint(args: &LintArgs, cli: &Cli) -> i32 {
    match run_lint_impl(args, cli, ci_from_env()) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            ErrorOutput::new(cli.color.into()).print(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

pub(crate) fn run_lint_impl(args: &LintArgs, cli: &Cli, in_ci: bool) -> Result<i32> {
    let ctx = RunContext::prepare(cli, &args.selection, in_ci)?;
    // Command-line values win over the config file.
    let exe = args.exe.as_deref().unwrap_or(&ctx.config.lint.exe);
    let linter_args = if args.linter_args.is_empty() {
        &ctx.config.lint.args
    } else {
        &args.linter_args
    };
    let tool = aggregate_linter(exe, linter_args);

    let result = ToolRunner::new(ProcessRunner, &ctx.root)
        .with_package_prefix(&ctx.config.tools.package_prefix)
        .run_all(std::slice::from_ref(&tool), &ctx.targets);

    report_failures(cli, &result);
    Ok(result.exit_code())
}

#[cfg(test)]
#[path = "lint_tests.rs"]
mod tests;
