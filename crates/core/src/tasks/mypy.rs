//! MyPy type checking task.

use crate::context::{ExecutionContext, RunOptions};
use crate::runner::TaskArgs;
use crate::types::ChoreResult;

/// Run mypy to check for type errors.
pub fn check(context: &dyn ExecutionContext, _args: &TaskArgs) -> ChoreResult<()> {
    context.run("poetry run mypy .", RunOptions::echoed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::RecordingContext;

    #[test]
    fn check_runs_mypy_with_echo() {
        let context = RecordingContext::new();
        check(&context, &TaskArgs::new()).expect("check should succeed");

        let calls = context.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].command, "poetry run mypy .");
        assert!(calls[0].options.echo);
    }
}
