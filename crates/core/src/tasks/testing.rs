//! Testing tasks for unit, integration, and multi-version testing.

use crate::context::{ExecutionContext, RunOptions};
use crate::runner::TaskArgs;
use crate::types::ChoreResult;

/// Run unit tests using pytest.
pub fn unit(context: &dyn ExecutionContext, _args: &TaskArgs) -> ChoreResult<()> {
    context.run(
        "poetry run pytest tests/unit/ --disable-socket --cov=src --cov=project \
         --cov-config=.unit-test-coveragerc --cov-report term-missing --cov-report term:skip-covered",
        RunOptions::echoed(),
    )
}

/// Run integration tests using pytest.
pub fn integration(context: &dyn ExecutionContext, _args: &TaskArgs) -> ChoreResult<()> {
    context.run(
        "poetry run pytest tests/integration/ --disable-socket --cov=src \
         --cov-config=.integration-test-coveragerc --cov-report term-missing --cov-report term:skip-covered",
        RunOptions::echoed(),
    )
}

/// Run multi-version testing using tox.
pub fn tox(context: &dyn ExecutionContext, _args: &TaskArgs) -> ChoreResult<()> {
    context.run("poetry run tox", RunOptions::echoed())
}
