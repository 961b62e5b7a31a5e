//! Devcontainer verification task.

use crate::context::{ExecutionContext, RunOptions};
use crate::runner::TaskArgs;
use crate::tasks::current_working_directory;
use crate::types::ChoreResult;

/// Verify the devcontainer builds and runs correctly in headless mode.
///
/// `build_only` stops after the image build (fast check). `run_project_check`
/// runs the full check pipeline inside the container instead of only probing
/// the CLI.
pub fn check(context: &dyn ExecutionContext, args: &TaskArgs) -> ChoreResult<()> {
    let workspace = current_working_directory()?;

    // Verify Docker is available before building anything.
    context.run("docker info", RunOptions::hidden())?;

    context.run(
        &format!(
            "npx @devcontainers/cli build --workspace-folder {}",
            workspace.display()
        ),
        RunOptions::echoed(),
    )?;

    if args.flag("build_only") {
        return Ok(());
    }

    context.run(
        &format!(
            "npx @devcontainers/cli up --workspace-folder {}",
            workspace.display()
        ),
        RunOptions::echoed(),
    )?;

    let verify_command = if args.flag("run_project_check") {
        "chore check"
    } else {
        "chore --help"
    };
    context.run(
        &format!(
            "npx @devcontainers/cli exec --workspace-folder {} {}",
            workspace.display(),
            verify_command
        ),
        RunOptions::echoed(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::RecordingContext;

    #[test]
    fn check_builds_starts_and_probes_the_container() {
        let context = RecordingContext::new();
        check(&context, &TaskArgs::new()).expect("check should succeed");

        let workspace = current_working_directory().expect("cwd");
        let calls = context.calls();
        assert_eq!(calls.len(), 4);
        assert_eq!(calls[0].command, "docker info");
        assert!(calls[0].options.hide);
        assert_eq!(
            calls[1].command,
            format!(
                "npx @devcontainers/cli build --workspace-folder {}",
                workspace.display()
            )
        );
        assert_eq!(
            calls[2].command,
            format!(
                "npx @devcontainers/cli up --workspace-folder {}",
                workspace.display()
            )
        );
        assert!(calls[3].command.ends_with("chore --help"));
    }

    #[test]
    fn build_only_stops_after_the_image_build() {
        let context = RecordingContext::new();
        let args = TaskArgs::new().with("build_only", true);
        check(&context, &args).expect("check should succeed");

        assert_eq!(context.calls().len(), 2);
    }

    #[test]
    fn run_project_check_verifies_with_the_full_pipeline() {
        let context = RecordingContext::new();
        let args = TaskArgs::new().with("run_project_check", true);
        check(&context, &args).expect("check should succeed");

        let commands = context.commands();
        assert_eq!(commands.len(), 4);
        assert!(commands[3].ends_with("chore check"));
    }
}
