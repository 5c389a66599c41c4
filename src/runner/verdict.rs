use super::{Signal, ToolOutput, ToolSpec};

/// Outcome of one tool run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    /// The tool ran and reported problems; carries the report channel's content.
    Fail(String),
    /// The tool itself could not complete; carries what it said about it.
    ExecutionError(String),
}

impl Verdict {
    #[must_use]
    pub const fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    /// Contribution to the run's failure count.
    #[must_use]
    pub const fn failure_weight(&self) -> usize {
        match self {
            Self::Pass => 0,
            Self::Fail(_) | Self::ExecutionError(_) => 1,
        }
    }
}

/// Classify a finished tool process according to its [`ToolSpec`].
///
/// | signal        | failure when                 | otherwise, exit != 0    |
/// |---------------|------------------------------|-------------------------|
/// | `output`      | report channel has content   | `ExecutionError(other)` |
/// | `exit-status` | exit status is exactly 1     | `ExecutionError(other)` |
#[must_use]
pub fn interpret(spec: &ToolSpec, output: &ToolOutput) -> Verdict {
    let designated = output.channel(spec.report);
    let other = output.channel(spec.report.other());

    let found_problems = match spec.signal {
        Signal::Output => !designated.is_empty(),
        Signal::ExitStatus => output.status == Some(1),
    };
    if found_problems {
        return Verdict::Fail(designated.into_owned());
    }

    match output.status {
        Some(0) => Verdict::Pass,
        Some(_) => Verdict::ExecutionError(error_detail(&other, &designated)),
        None => {
            let detail = error_detail(&other, &designated);
            Verdict::ExecutionError(if detail.is_empty() {
                "terminated by signal".to_string()
            } else {
                format!("terminated by signal\n{detail}")
            })
        }
    }
}

fn error_detail(other: &str, designated: &str) -> String {
    if other.trim().is_empty() {
        designated.to_string()
    } else {
        other.to_string()
    }
}

/// Prefix every line of `report` with two spaces.
#[must_use]
pub fn indent(report: &str) -> String {
    report
        .trim_end_matches('\n')
        .lines()
        .map(|line| format!("  {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
