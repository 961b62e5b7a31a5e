//! Ruff linting and formatting tasks.

use crate::context::{ExecutionContext, RunOptions};
use crate::runner::TaskArgs;
use crate::types::ChoreResult;

/// Run ruff to check for code style issues.
pub fn lint(context: &dyn ExecutionContext, args: &TaskArgs) -> ChoreResult<()> {
    if args.flag("apply_safe_fixes") {
        context.run("poetry run ruff check . --fix", RunOptions::echoed())
    } else if args.flag("apply_unsafe_fixes") {
        context.run("poetry run ruff check . --unsafe-fixes", RunOptions::echoed())
    } else {
        context.run("poetry run ruff check . --no-fix", RunOptions::echoed())
    }
}

/// Run ruff to format code.
pub fn format(context: &dyn ExecutionContext, args: &TaskArgs) -> ChoreResult<()> {
    if args.flag("apply_safe_fixes") {
        context.run("poetry run ruff format . --no-preview", RunOptions::echoed())
    } else {
        context.run("poetry run ruff format . --check", RunOptions::echoed())
    }
}
