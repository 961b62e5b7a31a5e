//! Command execution context
//!
//! This module provides the capability every task operates through: running a
//! shell command string with a small set of options. Tasks never inspect a
//! command's output; a failing command surfaces as an error and unwinds the
//! calling task.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use colored::*;

use crate::types::{ChoreError, ChoreResult};

/// Options applied to a single command invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunOptions {
    /// Print the command line before running it.
    pub echo: bool,
    /// Suppress the command's stdout and stderr.
    pub hide: bool,
    /// Tolerate a non-zero exit status instead of failing.
    pub warn: bool,
}

impl RunOptions {
    /// Echo the command before running it.
    pub fn echoed() -> Self {
        Self {
            echo: true,
            ..Self::default()
        }
    }

    /// Run the command with its output suppressed.
    pub fn hidden() -> Self {
        Self {
            hide: true,
            ..Self::default()
        }
    }

    /// Tolerate a non-zero exit status.
    pub fn tolerant(self) -> Self {
        Self { warn: true, ..self }
    }
}

/// The shared capability tasks run external commands through.
///
/// Implementations decide how a command string is executed. The production
/// implementation is [`ShellContext`]; tests use
/// [`RecordingContext`](crate::mock::RecordingContext).
pub trait ExecutionContext {
    /// Run a command string, failing on a non-zero exit unless
    /// [`RunOptions::warn`] is set.
    fn run(&self, command: &str, options: RunOptions) -> ChoreResult<()>;
}

/// Execution context that runs commands through `sh -c`.
#[derive(Debug, Default)]
pub struct ShellContext {
    root: Option<PathBuf>,
}

impl ShellContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run all commands from the given directory instead of the process
    /// working directory.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }
}

impl ExecutionContext for ShellContext {
    fn run(&self, command: &str, options: RunOptions) -> ChoreResult<()> {
        if options.echo {
            println!("{}", format!("$ {}", command).bold());
        }

        let mut shell = Command::new("sh");
        shell.arg("-c").arg(command);
        if let Some(root) = &self.root {
            shell.current_dir(root);
        }
        if options.hide {
            shell.stdout(Stdio::null());
            shell.stderr(Stdio::null());
        }

        let status = shell.status().map_err(|e| {
            ChoreError::Command(format!("Failed to execute command '{}': {}", command, e))
        })?;

        if !status.success() && !options.warn {
            return Err(ChoreError::Command(format!(
                "Command '{}' failed with exit code {}",
                command,
                status.code().unwrap_or(-1)
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_succeeds_for_zero_exit() {
        let context = ShellContext::new();
        assert!(context.run("true", RunOptions::default()).is_ok());
    }

    #[test]
    fn run_fails_for_non_zero_exit() {
        let context = ShellContext::new();
        let result = context.run("exit 7", RunOptions::default());
        match result {
            Err(ChoreError::Command(message)) => {
                assert!(message.contains("exit code 7"), "unexpected: {}", message);
            }
            _ => panic!("expected a command error"),
        }
    }

    #[test]
    fn warn_tolerates_non_zero_exit() {
        let context = ShellContext::new();
        let result = context.run("exit 7", RunOptions::default().tolerant());
        assert!(result.is_ok());
    }

    #[test]
    fn hidden_commands_still_report_status() {
        let context = ShellContext::new();
        assert!(context.run("echo hidden", RunOptions::hidden()).is_ok());
        assert!(context.run("exit 1", RunOptions::hidden()).is_err());
    }

    #[test]
    fn with_root_runs_in_the_given_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("marker"), "x").expect("write marker");

        let context = ShellContext::with_root(dir.path());
        assert!(context.run("test -f marker", RunOptions::default()).is_ok());
    }

    #[test]
    fn unknown_command_fails_through_the_shell() {
        // `sh -c` reports an unknown command as a non-zero exit rather than
        // a spawn failure.
        let context = ShellContext::new();
        let result = context.run("definitely-not-a-real-tool-xyz", RunOptions::default());
        assert!(result.is_err());
    }
}
