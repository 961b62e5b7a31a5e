//! Pip-audit security vulnerability checking task.

use crate::context::{ExecutionContext, RunOptions};
use crate::runner::TaskArgs;
use crate::types::ChoreResult;

/// Run pip-audit against exported main and dev requirement sets.
pub fn check(context: &dyn ExecutionContext, _args: &TaskArgs) -> ChoreResult<()> {
    context.run("mkdir -p .quality/pipaudit", RunOptions::echoed())?;
    context.run(
        "poetry export --format=requirements.txt --without-hashes --only main \
         -o .quality/pipaudit/requirements-main.txt",
        RunOptions::echoed(),
    )?;
    context.run(
        "poetry export --format=requirements.txt --without-hashes --without main \
         -o .quality/pipaudit/requirements-dev.txt",
        RunOptions::echoed(),
    )?;
    context.run(
        "poetry run pip-audit -r .quality/pipaudit/requirements-main.txt",
        RunOptions::echoed(),
    )?;
    context.run(
        "poetry run pip-audit -r .quality/pipaudit/requirements-dev.txt",
        RunOptions::echoed(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::RecordingContext;

    #[test]
    fn check_exports_requirements_then_audits_both_sets() {
        let context = RecordingContext::new();
        check(&context, &TaskArgs::new()).expect("check should succeed");

        let commands = context.commands();
        assert_eq!(commands.len(), 5);
        assert_eq!(commands[0], "mkdir -p .quality/pipaudit");
        assert!(commands[1].starts_with("poetry export"));
        assert!(commands[1].contains("--only main"));
        assert!(commands[2].contains("--without main"));
        assert_eq!(
            commands[3],
            "poetry run pip-audit -r .quality/pipaudit/requirements-main.txt"
        );
        assert_eq!(
            commands[4],
            "poetry run pip-audit -r .quality/pipaudit/requirements-dev.txt"
        );
    }

    #[test]
    fn check_stops_at_the_first_failing_step() {
        let context = RecordingContext::fail_when("poetry export");
        assert!(check(&context, &TaskArgs::new()).is_err());
        // mkdir and the failing export, nothing after.
        assert_eq!(context.calls().len(), 2);
    }
}
