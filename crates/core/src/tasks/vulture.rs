//! Vulture tasks for checking unused code.

use crate::context::{ExecutionContext, RunOptions};
use crate::runner::TaskArgs;
use crate::types::ChoreResult;

/// Run vulture to check for unused code.
pub fn check(context: &dyn ExecutionContext, _args: &TaskArgs) -> ChoreResult<()> {
    context.run("poetry run vulture . vulture_whitelist", RunOptions::echoed())
}

/// Regenerate the vulture whitelist file.
pub fn regenerate_whitelist(context: &dyn ExecutionContext, _args: &TaskArgs) -> ChoreResult<()> {
    context.run(
        "poetry run vulture . --make-whitelist > vulture_whitelist",
        RunOptions::echoed(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::RecordingContext;

    #[test]
    fn check_runs_vulture_against_the_whitelist() {
        let context = RecordingContext::new();
        check(&context, &TaskArgs::new()).expect("check should succeed");

        assert_eq!(context.commands(), vec!["poetry run vulture . vulture_whitelist"]);
    }

    #[test]
    fn regenerate_rewrites_the_whitelist() {
        let context = RecordingContext::new();
        regenerate_whitelist(&context, &TaskArgs::new()).expect("regenerate should succeed");

        assert_eq!(
            context.commands(),
            vec!["poetry run vulture . --make-whitelist > vulture_whitelist"]
        );
    }
}
