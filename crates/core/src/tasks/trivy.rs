//! Trivy security scanning task.

use crate::context::{ExecutionContext, RunOptions};
use crate::runner::TaskArgs;
use crate::types::ChoreResult;

/// Run the trivy scanner via Docker against the project filesystem.
pub fn check(context: &dyn ExecutionContext, _args: &TaskArgs) -> ChoreResult<()> {
    context.run("mkdir -p .quality/trivy", RunOptions::echoed())?;
    context.run(
        "docker run --rm \
         -v $(pwd):/workspace \
         -v $(pwd)/.quality/trivy:/root/.cache/ \
         aquasec/trivy fs \
         --scanners vuln,secret,misconfig,license \
         --exit-code 1 \
         /workspace",
        RunOptions::echoed(),
    )
}
