//! Pre-commit hook tasks.

use crate::context::{ExecutionContext, RunOptions};
use crate::runner::TaskArgs;
use crate::types::ChoreResult;

/// Run pre-commit checks.
///
/// With `apply_safe_fixes`, the file-rewriting hooks run first in a
/// failure-tolerant pass, since they exit non-zero whenever they change a
/// file.
pub fn check(context: &dyn ExecutionContext, args: &TaskArgs) -> ChoreResult<()> {
    if args.flag("apply_safe_fixes") {
        context.run(
            "poetry run pre-commit run end-of-file-fixer --all-files",
            RunOptions::echoed().tolerant(),
        )?;
        context.run(
            "poetry run pre-commit run md-toc --all-files",
            RunOptions::echoed().tolerant(),
        )?;
    }
    context.run("poetry run pre-commit run --all-files", RunOptions::echoed())
}

/// Update pre-commit hooks to latest versions.
pub fn update(context: &dyn ExecutionContext, _args: &TaskArgs) -> ChoreResult<()> {
    context.run("poetry run pre-commit autoupdate", RunOptions::echoed())
}
