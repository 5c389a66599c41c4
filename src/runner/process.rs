use std::borrow::Cow;
use std::path::Path;
use std::process::Command;

use super::Channel;

/// Captured result of one finished tool process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    pub stdout: String,
    pub stderr: String,
    /// Exit code; `None` when the process was terminated by a signal.
    pub status: Option<i32>,
}

impl ToolOutput {
    #[must_use]
    pub fn channel(&self, channel: Channel) -> Cow<'_, str> {
        match channel {
            Channel::Stdout => Cow::Borrowed(&self.stdout),
            Channel::Stderr => Cow::Borrowed(&self.stderr),
            Channel::Both if self.stderr.is_empty() => Cow::Borrowed(&self.stdout),
            Channel::Both if self.stdout.is_empty() => Cow::Borrowed(&self.stderr),
            Channel::Both => {
                let sep = if self.stdout.ends_with('\n') { "" } else { "\n" };
                Cow::Owned(format!("{}{sep}{}", self.stdout, self.stderr))
            }
        }
    }
}

/// Runs an external command to completion and captures both output streams.
pub trait CommandRunner {
    /// # Errors
    /// Returns an error if the process cannot be spawned.
    fn run(&self, program: &str, args: &[String], cwd: &Path) -> std::io::Result<ToolOutput>;
}

/// Runs commands as child processes, blocking until each exits.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&self, program: &str, args: &[String], cwd: &Path) -> std::io::Result<ToolOutput> {
        let output = Command::new(program).args(args).current_dir(cwd).output()?;
        Ok(ToolOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            status: output.status.code(),
        })
    }
}
