//! Deptry task for checking unused dependencies.

use crate::context::{ExecutionContext, RunOptions};
use crate::runner::TaskArgs;
use crate::types::ChoreResult;

/// Run deptry to check for unused dependencies.
pub fn check(context: &dyn ExecutionContext, _args: &TaskArgs) -> ChoreResult<()> {
    context.run("poetry run deptry .", RunOptions::echoed())
}
