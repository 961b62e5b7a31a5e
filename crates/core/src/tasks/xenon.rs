//! Xenon task for checking code complexity.

use crate::context::{ExecutionContext, RunOptions};
use crate::runner::TaskArgs;
use crate::types::ChoreResult;

/// Run xenon to check for code complexity.
pub fn check(context: &dyn ExecutionContext, _args: &TaskArgs) -> ChoreResult<()> {
    context.run(
        "poetry run xenon --max-absolute B --max-modules A --max-average A .",
        RunOptions::echoed(),
    )
}
