//! Task definitions for the external tools the project automates.
//!
//! Each submodule wraps one tool and exposes task functions following the
//! [`TaskFn`](crate::runner::TaskFn) calling convention: the shared execution
//! context first, named arguments second. The command-line syntax for each
//! tool lives here as data; sequencing and skip handling belong to the
//! [`runner`](crate::runner).

use std::path::PathBuf;

use crate::types::ChoreResult;

pub mod actionlint;
pub mod deptry;
pub mod devcontainer;
pub mod mypy;
pub mod pipaudit;
pub mod poetry;
pub mod precommit;
pub mod ruff;
pub mod testing;
pub mod trivy;
pub mod vulture;
pub mod xenon;

/// Absolute path of the current working directory.
pub(crate) fn current_working_directory() -> ChoreResult<PathBuf> {
    let dir = std::env::current_dir()?;
    Ok(dir)
}
