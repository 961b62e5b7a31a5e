//! Poetry dependency management task.

use crate::context::{ExecutionContext, RunOptions};
use crate::runner::TaskArgs;
use crate::types::ChoreResult;

/// Update all poetry dependencies.
pub fn update(context: &dyn ExecutionContext, _args: &TaskArgs) -> ChoreResult<()> {
    context.run("poetry update", RunOptions::echoed())
}
