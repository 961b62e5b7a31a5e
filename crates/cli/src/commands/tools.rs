//! Direct single-tool invocations.
//!
//! Each function calls one task with explicit arguments, without the runner's
//! banner and summary machinery.

use anyhow::Result;
use chore_core::context::ExecutionContext;
use chore_core::runner::{TaskArgs, TaskFn};
use chore_core::tasks::{
    actionlint, deptry, devcontainer, mypy, pipaudit, poetry, precommit, ruff, testing, trivy,
    vulture, xenon,
};

fn invoke(context: &dyn ExecutionContext, action: TaskFn, args: TaskArgs) -> Result<()> {
    action(context, &args).map_err(|e| anyhow::anyhow!("Task failed: {}", e))
}

pub fn ruff_lint(
    context: &dyn ExecutionContext,
    apply_safe_fixes: bool,
    apply_unsafe_fixes: bool,
) -> Result<()> {
    invoke(
        context,
        ruff::lint,
        TaskArgs::new()
            .with("apply_safe_fixes", apply_safe_fixes)
            .with("apply_unsafe_fixes", apply_unsafe_fixes),
    )
}

pub fn ruff_format(context: &dyn ExecutionContext, apply_safe_fixes: bool) -> Result<()> {
    invoke(
        context,
        ruff::format,
        TaskArgs::new().with("apply_safe_fixes", apply_safe_fixes),
    )
}

pub fn mypy_check(context: &dyn ExecutionContext) -> Result<()> {
    invoke(context, mypy::check, TaskArgs::new())
}

pub fn precommit_check(context: &dyn ExecutionContext, apply_safe_fixes: bool) -> Result<()> {
    invoke(
        context,
        precommit::check,
        TaskArgs::new().with("apply_safe_fixes", apply_safe_fixes),
    )
}

pub fn precommit_update(context: &dyn ExecutionContext) -> Result<()> {
    invoke(context, precommit::update, TaskArgs::new())
}

pub fn tests_unit(context: &dyn ExecutionContext) -> Result<()> {
    invoke(context, testing::unit, TaskArgs::new())
}

pub fn tests_integration(context: &dyn ExecutionContext) -> Result<()> {
    invoke(context, testing::integration, TaskArgs::new())
}

pub fn tests_tox(context: &dyn ExecutionContext) -> Result<()> {
    invoke(context, testing::tox, TaskArgs::new())
}

pub fn pipaudit_check(context: &dyn ExecutionContext) -> Result<()> {
    invoke(context, pipaudit::check, TaskArgs::new())
}

pub fn deptry_check(context: &dyn ExecutionContext) -> Result<()> {
    invoke(context, deptry::check, TaskArgs::new())
}

pub fn vulture_check(context: &dyn ExecutionContext) -> Result<()> {
    invoke(context, vulture::check, TaskArgs::new())
}

pub fn vulture_whitelist(context: &dyn ExecutionContext) -> Result<()> {
    invoke(context, vulture::regenerate_whitelist, TaskArgs::new())
}

pub fn xenon_check(context: &dyn ExecutionContext) -> Result<()> {
    invoke(context, xenon::check, TaskArgs::new())
}

pub fn actionlint_check(context: &dyn ExecutionContext) -> Result<()> {
    invoke(context, actionlint::check, TaskArgs::new())
}

pub fn poetry_update(context: &dyn ExecutionContext) -> Result<()> {
    invoke(context, poetry::update, TaskArgs::new())
}

pub fn trivy_check(context: &dyn ExecutionContext) -> Result<()> {
    invoke(context, trivy::check, TaskArgs::new())
}

pub fn devcontainer_check(
    context: &dyn ExecutionContext,
    build_only: bool,
    run_project_check: bool,
) -> Result<()> {
    invoke(
        context,
        devcontainer::check,
        TaskArgs::new()
            .with("build_only", build_only)
            .with("run_project_check", run_project_check),
    )
}
