//! Project-level pipelines for updating dependencies and running all checks.
//!
//! Pipelines are plain ordered lists of [`ProjectTask`] descriptors handed to
//! a fresh [`TaskRunner`] per invocation. Order matters: formatting runs
//! before linting, static checks before tests, tests before the slower
//! security scans, and dependency updates before hook updates.

use crate::context::ExecutionContext;
use crate::runner::{ProjectTask, TaskArgs, TaskRunner};
use crate::tasks::{deptry, mypy, pipaudit, poetry, precommit, ruff, testing, trivy, vulture, xenon};
use crate::types::ChoreResult;

/// Fix-application flags threaded through the check pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CheckOptions {
    pub apply_safe_fixes: bool,
    pub apply_unsafe_fixes: bool,
}

/// The ordered task list for `check`.
pub fn check_tasks(options: &CheckOptions) -> Vec<ProjectTask> {
    vec![
        ProjectTask::new(
            "precommit.check",
            precommit::check,
            TaskArgs::new().with("apply_safe_fixes", options.apply_safe_fixes),
        ),
        ProjectTask::new(
            "ruff.format",
            ruff::format,
            TaskArgs::new().with("apply_safe_fixes", options.apply_safe_fixes),
        ),
        ProjectTask::new(
            "ruff.lint",
            ruff::lint,
            TaskArgs::new()
                .with("apply_safe_fixes", options.apply_safe_fixes)
                .with("apply_unsafe_fixes", options.apply_unsafe_fixes),
        ),
        ProjectTask::new("mypy.check", mypy::check, TaskArgs::new()),
        ProjectTask::new("vulture.check", vulture::check, TaskArgs::new()),
        ProjectTask::new("xenon.check", xenon::check, TaskArgs::new()),
        ProjectTask::new("tests.unit", testing::unit, TaskArgs::new()),
        ProjectTask::new("tests.integration", testing::integration, TaskArgs::new()),
        ProjectTask::new("pipaudit.check", pipaudit::check, TaskArgs::new()),
        ProjectTask::new("deptry.check", deptry::check, TaskArgs::new()),
        ProjectTask::new("trivy.check", trivy::check, TaskArgs::new()),
    ]
}

/// The ordered task list for `update`.
pub fn update_tasks() -> Vec<ProjectTask> {
    vec![
        ProjectTask::new("poetry.update", poetry::update, TaskArgs::new()),
        ProjectTask::new("precommit.update", precommit::update, TaskArgs::new()),
    ]
}

/// Run all project checks.
pub fn check(
    context: &dyn ExecutionContext,
    options: &CheckOptions,
    skip: Option<Vec<String>>,
) -> ChoreResult<()> {
    TaskRunner::new(context, check_tasks(options), skip).run()
}

/// Update all dependencies and pre-commit hooks.
pub fn update(context: &dyn ExecutionContext, skip: Option<Vec<String>>) -> ChoreResult<()> {
    TaskRunner::new(context, update_tasks(), skip).run()
}
