use std::io::{self, Write};

use super::{ColorMode, ansi};
use crate::runner::{RunResult, ToolOutcome, Verdict, indent};

/// Writes one labelled block per failing tool.
pub struct ReportWriter {
    use_colors: bool,
}

impl ReportWriter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: mode.use_colors_on_stderr(),
        }
    }

    #[must_use]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Write the failure blocks of `result` in tool order. Passing tools write nothing.
    ///
    /// # Errors
    /// Returns an error if writing to `w` fails.
    pub fn write_result<W: Write>(&self, w: &mut W, result: &RunResult) -> io::Result<()> {
        for outcome in result.failures() {
            self.write_outcome(w, outcome)?;
        }
        Ok(())
    }

    fn write_outcome<W: Write>(&self, w: &mut W, outcome: &ToolOutcome) -> io::Result<()> {
        match &outcome.verdict {
            Verdict::Pass => Ok(()),
            Verdict::Fail(report) => {
                let header = self.header(ansi::RED, &format!("Files must pass {}:", outcome.name));
                write!(w, "\n{header}\n\n{}\n", indent(report))
            }
            Verdict::ExecutionError(detail) => {
                let header = self.header(ansi::YELLOW, &format!("Error running {}:", outcome.name));
                write!(w, "\n{header}\n{}\n\n", indent(detail))
            }
        }
    }

    fn header(&self, color: &str, text: &str) -> String {
        if self.use_colors {
            format!("{}{color}{text}{}", ansi::BOLD, ansi::RESET)
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
