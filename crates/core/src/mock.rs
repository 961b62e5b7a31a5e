//! Recording execution context for exercising tasks without spawning
//! processes.

use std::cell::RefCell;

use crate::context::{ExecutionContext, RunOptions};
use crate::types::{ChoreError, ChoreResult};

/// One recorded `run` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub command: String,
    pub options: RunOptions,
}

/// Execution context that records every command instead of executing it.
///
/// Optionally fails any command containing a configured pattern, which makes
/// mid-pipeline failures reproducible in tests.
#[derive(Debug, Default)]
pub struct RecordingContext {
    calls: RefCell<Vec<RecordedCall>>,
    fail_matching: Option<String>,
}

impl RecordingContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail any command whose text contains `pattern`.
    pub fn fail_when(pattern: &str) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            fail_matching: Some(pattern.to_string()),
        }
    }

    /// All recorded invocations, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }

    /// The recorded command strings, in order.
    pub fn commands(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .map(|call| call.command.clone())
            .collect()
    }
}

impl ExecutionContext for RecordingContext {
    fn run(&self, command: &str, options: RunOptions) -> ChoreResult<()> {
        self.calls.borrow_mut().push(RecordedCall {
            command: command.to_string(),
            options,
        });

        if let Some(pattern) = &self.fail_matching {
            if command.contains(pattern.as_str()) {
                return Err(ChoreError::Command(format!(
                    "Command '{}' failed with exit code 1",
                    command
                )));
            }
        }

        Ok(())
    }
}
