use serde::Serialize;

use crate::error::Result;
use crate::runner::{RunResult, ToolOutcome, Verdict};
use crate::scanner::Targets;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    targets: TargetList<'a>,
    results: Vec<ToolEntry<'a>>,
}

#[derive(Serialize)]
struct Summary {
    tools: usize,
    passed: usize,
    failed: usize,
    errors: usize,
    skipped: usize,
    exit_code: i32,
}

#[derive(Serialize)]
struct TargetList<'a> {
    files: &'a [String],
    dirs: &'a [String],
}

#[derive(Serialize)]
struct ToolEntry<'a> {
    tool: &'a str,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<&'a str>,
}

/// Render a machine-readable summary of a run.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn format_json(result: &RunResult, targets: &Targets) -> Result<String> {
    let (passed, failed, errors) =
        result
            .outcomes
            .iter()
            .fold((0, 0, 0), |(p, f, e), o| match o.verdict {
                Verdict::Pass => (p + 1, f, e),
                Verdict::Fail(_) => (p, f + 1, e),
                Verdict::ExecutionError(_) => (p, f, e + 1),
            });

    let output = JsonOutput {
        summary: Summary {
            tools: result.outcomes.len(),
            passed,
            failed,
            errors,
            skipped: result.outcomes.iter().filter(|o| o.skipped).count(),
            exit_code: result.exit_code(),
        },
        targets: TargetList {
            files: &targets.files,
            dirs: &targets.dirs,
        },
        results: result.outcomes.iter().map(convert_outcome).collect(),
    };

    Ok(serde_json::to_string_pretty(&output)?)
}

fn convert_outcome(outcome: &ToolOutcome) -> ToolEntry<'_> {
    let (status, report) = match &outcome.verdict {
        Verdict::Pass if outcome.skipped => ("skipped", None),
        Verdict::Pass => ("passed", None),
        Verdict::Fail(report) => ("failed", Some(report.as_str())),
        Verdict::ExecutionError(detail) => ("error", Some(detail.as_str())),
    };
    ToolEntry {
        tool: &outcome.name,
        status,
        report,
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
