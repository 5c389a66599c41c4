use crate::cli::{CheckArgs, Cli};
use crate::error::Result;
use crate::output::{ErrorOutput, OutputFormat, format_json};
use crate::runner::{ProcessRunner, ToolRunner};
use crate::scanner::ci_from_env;
use crate::EXIT_CONFIG_ERROR;

use super::context::{RunContext, print_summary, report_failures};

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli, ci_from_env()) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            ErrorOutput::new(cli.color.into()).print(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

pub(crate) fn run_check_impl(args: &CheckArgs, cli: &Cli, in_ci: bool) -> Result<i32> {
    let ctx = RunContext::prepare(cli, &args.selection, in_ci)?;

    let result = ToolRunner::new(ProcessRunner, &ctx.root)
        .with_package_prefix(&ctx.config.tools.package_prefix)
        .run_all(&ctx.config.tools.check, &ctx.targets);

    report_failures(cli, &result);
    if args.format == OutputFormat::Json {
        print_summary(&format_json(&result, &ctx.targets)?);
    }
    Ok(result.exit_code())
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
