//! Actionlint task for checking GitHub Actions workflows.

use crate::context::{ExecutionContext, RunOptions};
use crate::runner::TaskArgs;
use crate::types::ChoreResult;

/// Run actionlint to check GitHub Actions workflows.
pub fn check(context: &dyn ExecutionContext, _args: &TaskArgs) -> ChoreResult<()> {
    context.run("poetry run actionlint", RunOptions::echoed())
}
