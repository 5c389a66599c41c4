//! Static description of one external check: what to run and how to read its result.

use serde::{Deserialize, Serialize};

/// Placeholder argument replaced by the path list.
pub const PATHS_PLACEHOLDER: &str = "{paths}";

/// Which path list a tool is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Granularity {
    /// The deduplicated, sorted file list.
    Files,
    /// The Directory Set.
    #[default]
    Dirs,
    /// No path arguments at all.
    None,
}

/// What tells a tool's failure apart from success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Signal {
    /// Anything printed on the report channel is a finding.
    Output,
    /// Exit status 1 is a finding; any other non-zero status is a malfunction.
    #[default]
    ExitStatus,
}

/// Output stream of a tool process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Channel {
    #[default]
    Stdout,
    Stderr,
    /// Stdout followed by stderr.
    Both,
}

impl Channel {
    /// The stream not used for the report. `Both` has no other stream and maps to itself.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Stdout => Self::Stderr,
            Self::Stderr => Self::Stdout,
            Self::Both => Self::Both,
        }
    }
}

/// One external check tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolSpec {
    /// Label used in reports.
    pub name: String,
    /// Program followed by its fixed arguments.
    pub command: Vec<String>,
    #[serde(default)]
    pub input: Granularity,
    #[serde(default)]
    pub signal: Signal,
    /// Channel whose content is the failure report.
    #[serde(default)]
    pub report: Channel,
    /// Marker file (relative to the repository root) that must exist for the tool to run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires: Option<String>,
}

impl ToolSpec {
    #[must_use]
    pub fn new(name: &str, command: &[&str], input: Granularity, signal: Signal) -> Self {
        Self {
            name: name.to_string(),
            command: command.iter().map(ToString::to_string).collect(),
            input,
            signal,
            report: Channel::Stdout,
            requires: None,
        }
    }

    #[must_use]
    pub const fn with_report(mut self, report: Channel) -> Self {
        self.report = report;
        self
    }

    #[must_use]
    pub fn with_requires(mut self, marker: &str) -> Self {
        self.requires = Some(marker.to_string());
        self
    }

    /// Program name, or `None` for an empty command.
    #[must_use]
    pub fn program(&self) -> Option<&str> {
        self.command.first().map(String::as_str)
    }

    /// Arguments after the program with `paths` spliced in.
    ///
    /// An argument equal to `{paths}` is replaced by the paths; otherwise the
    /// paths are appended.
    #[must_use]
    pub fn render_args(&self, paths: &[String]) -> Vec<String> {
        let fixed = self.command.iter().skip(1);
        if self.command.iter().any(|a| a == PATHS_PLACEHOLDER) {
            let mut args = Vec::with_capacity(self.command.len() + paths.len());
            for arg in fixed {
                if arg == PATHS_PLACEHOLDER {
                    args.extend(paths.iter().cloned());
                } else {
                    args.push(arg.clone());
                }
            }
            args
        } else {
            fixed.cloned().chain(paths.iter().cloned()).collect()
        }
    }
}

/// Default check table, in the order the tools run.
#[must_use]
pub fn builtin_check_tools() -> Vec<ToolSpec> {
    vec![
        ToolSpec::new("gofmt", &["gofmt", "-l"], Granularity::Files, Signal::Output),
        ToolSpec::new("golint", &["golint"], Granularity::Dirs, Signal::Output),
        ToolSpec::new("go vet", &["go", "vet"], Granularity::Dirs, Signal::ExitStatus)
            .with_report(Channel::Stderr),
        ToolSpec::new("errcheck", &["errcheck"], Granularity::Dirs, Signal::ExitStatus),
        ToolSpec::new("dep status", &["dep", "status"], Granularity::None, Signal::ExitStatus)
            .with_report(Channel::Stderr)
            .with_requires("Gopkg.lock"),
    ]
}

/// Single aggregate-linter tool: `exe args... <dirs>`, reporting whatever it prints on either stream.
#[must_use]
pub fn aggregate_linter(exe: &str, args: &[String]) -> ToolSpec {
    let mut command = Vec::with_capacity(args.len() + 1);
    command.push(exe.to_string());
    command.extend(args.iter().cloned());
    ToolSpec {
        name: exe.to_string(),
        command,
        input: Granularity::Dirs,
        signal: Signal::ExitStatus,
        report: Channel::Both,
        requires: None,
    }
}
