//! Chore Core Library
//!
//! Core library for the chore project automation tool. It wraps the external
//! quality tools a project depends on (linters, type checkers, test runners,
//! security scanners, dependency managers) as tasks and sequences them
//! through an orchestration runner with banner output and skip support.
//!
//! ## Architecture
//!
//! - [`runner`] - Task descriptors and the orchestration runner
//! - [`pipelines`] - Ordered `check` / `update` pipeline definitions
//! - [`tasks`] - One module per wrapped external tool
//! - [`context`] - The command-execution capability tasks run through
//! - [`config`] - Optional `chore.yml` configuration
//! - [`mock`] - Recording execution context for tests
//! - [`types`] - Common error types and type aliases
//!
//! ## Usage
//!
//! ```rust,no_run
//! use chore_core::pipelines::{self, CheckOptions};
//! use chore_core::ShellContext;
//!
//! # fn example() -> chore_core::ChoreResult<()> {
//! let context = ShellContext::new();
//! pipelines::check(&context, &CheckOptions::default(), None)?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod context;
pub mod mock;
pub mod pipelines;
pub mod runner;
pub mod tasks;
pub mod types;

// Re-export the main types for easier usage
pub use context::{ExecutionContext, RunOptions, ShellContext};
pub use runner::{ArgValue, ProjectTask, TaskArgs, TaskFn, TaskRunner};
pub use types::{ChoreError, ChoreResult};
