//! Task orchestration runner
//!
//! A pipeline is an ordered list of [`ProjectTask`] descriptors executed by a
//! [`TaskRunner`] against one shared [`ExecutionContext`]. The runner prints a
//! banner before each task, honors an opt-in skip list matched by exact name,
//! and ends with a summary of what ran and what was skipped. Execution is
//! strictly sequential and fail-fast: the first task error unwinds `run`
//! before any later task starts and before the summary prints.

use std::collections::BTreeMap;

use crate::context::ExecutionContext;
use crate::types::ChoreResult;

const RULE_WIDTH: usize = 60;

/// A single named-argument value passed to a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgValue {
    Bool(bool),
    Int(i64),
    Str(String),
}

impl From<bool> for ArgValue {
    fn from(value: bool) -> Self {
        ArgValue::Bool(value)
    }
}

impl From<i64> for ArgValue {
    fn from(value: i64) -> Self {
        ArgValue::Int(value)
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        ArgValue::Str(value.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        ArgValue::Str(value)
    }
}

/// Named arguments supplied to a task when it is invoked.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskArgs(BTreeMap<String, ArgValue>);

impl TaskArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a named argument, replacing any previous value under that name.
    pub fn with(mut self, name: &str, value: impl Into<ArgValue>) -> Self {
        self.0.insert(name.to_string(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        self.0.get(name)
    }

    /// Read a boolean argument, treating a missing or non-boolean value as
    /// `false`.
    pub fn flag(&self, name: &str) -> bool {
        matches!(self.0.get(name), Some(ArgValue::Bool(true)))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// The calling convention every task follows: the shared execution context
/// first, the task's named arguments second. Failure is signalled exclusively
/// through the error channel.
pub type TaskFn = fn(&dyn ExecutionContext, &TaskArgs) -> ChoreResult<()>;

/// A named unit of work in a pipeline.
///
/// Descriptors are immutable once constructed and compare structurally.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectTask {
    /// Display name, also used for skip matching.
    pub name: String,
    /// The task function to invoke.
    pub action: TaskFn,
    /// Named arguments forwarded to `action`.
    pub args: TaskArgs,
}

impl ProjectTask {
    pub fn new(name: impl Into<String>, action: TaskFn, args: TaskArgs) -> Self {
        Self {
            name: name.into(),
            action,
            args,
        }
    }
}

/// Executes an ordered list of tasks with banner output and skip support.
pub struct TaskRunner<'a> {
    context: &'a dyn ExecutionContext,
    tasks: Vec<ProjectTask>,
    skip: Vec<String>,
    executed: Vec<String>,
    skipped: Vec<String>,
}

impl<'a> TaskRunner<'a> {
    pub fn new(
        context: &'a dyn ExecutionContext,
        tasks: Vec<ProjectTask>,
        skip: Option<Vec<String>>,
    ) -> Self {
        Self {
            context,
            tasks,
            skip: skip.unwrap_or_default(),
            executed: Vec::new(),
            skipped: Vec::new(),
        }
    }

    /// Execute all configured tasks in order and print a summary.
    ///
    /// Tasks whose name appears in the skip list are announced and recorded
    /// as skipped without being invoked. A task error propagates immediately:
    /// no later task runs and no summary prints. The executed/skipped ledgers
    /// accumulate across calls, so build a fresh runner per pipeline run.
    pub fn run(&mut self) -> ChoreResult<()> {
        for index in 0..self.tasks.len() {
            let name = self.tasks[index].name.clone();
            if self.skip.contains(&name) {
                println!("\n⊘ Skipping: {}", name);
                self.skipped.push(name);
            } else {
                println!("{}", banner(&name));
                let task = &self.tasks[index];
                (task.action)(self.context, &task.args)?;
                self.executed.push(name);
            }
        }

        println!("{}", self.summary());
        Ok(())
    }

    /// Names of the tasks that ran, in execution order.
    pub fn executed(&self) -> &[String] {
        &self.executed
    }

    /// Names of the tasks that were skipped, in encounter order.
    pub fn skipped(&self) -> &[String] {
        &self.skipped
    }

    /// Render the summary block for the current ledgers.
    pub fn summary(&self) -> String {
        let rule = rule();
        let mut out = String::new();
        out.push_str(&format!("\n{}\n", rule));
        out.push_str("SUMMARY\n");
        out.push_str(&format!("{}\n", rule));
        out.push_str(&format!("✓ Completed: {} task(s)\n", self.executed.len()));
        for name in &self.executed {
            out.push_str(&format!("  - {}\n", name));
        }
        if !self.skipped.is_empty() {
            out.push_str(&format!("\n⊘ Skipped: {} task(s)\n", self.skipped.len()));
            for name in &self.skipped {
                out.push_str(&format!("  - {}\n", name));
            }
        }
        out.push_str(&rule);
        out
    }
}

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Render the banner printed before a task starts.
pub fn banner(name: &str) -> String {
    let rule = rule();
    format!("\n{}\nRunning: {}\n{}", rule, name, rule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::RunOptions;
    use crate::mock::RecordingContext;
    use crate::types::ChoreError;

    fn run_alpha(context: &dyn ExecutionContext, _args: &TaskArgs) -> ChoreResult<()> {
        context.run("alpha --all", RunOptions::default())
    }

    fn run_beta(context: &dyn ExecutionContext, _args: &TaskArgs) -> ChoreResult<()> {
        context.run("beta --all", RunOptions::default())
    }

    fn run_gamma(context: &dyn ExecutionContext, _args: &TaskArgs) -> ChoreResult<()> {
        context.run("gamma --all", RunOptions::default())
    }

    fn run_with_fix_flag(context: &dyn ExecutionContext, args: &TaskArgs) -> ChoreResult<()> {
        if args.flag("apply_safe_fixes") {
            context.run("fixer --fix", RunOptions::default())
        } else {
            context.run("fixer", RunOptions::default())
        }
    }

    fn always_fails(_context: &dyn ExecutionContext, _args: &TaskArgs) -> ChoreResult<()> {
        Err(ChoreError::Task("boom".to_string()))
    }

    #[test]
    fn project_task_holds_name_action_and_args() {
        let args = TaskArgs::new().with("arg1", "value1");
        let task = ProjectTask::new("test.task", run_alpha, args.clone());

        assert_eq!(task.name, "test.task");
        assert_eq!(task.args, args);
    }

    #[test]
    fn project_task_equality_is_structural() {
        let a = ProjectTask::new("t", run_alpha, TaskArgs::new().with("k", true));
        let b = ProjectTask::new("t", run_alpha, TaskArgs::new().with("k", true));
        let c = ProjectTask::new("t", run_beta, TaskArgs::new().with("k", true));
        let d = ProjectTask::new("t", run_alpha, TaskArgs::new().with("k", false));

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }

    #[test]
    fn executes_all_tasks_in_order_when_no_skip_list() {
        let context = RecordingContext::new();
        let tasks = vec![
            ProjectTask::new("task1", run_alpha, TaskArgs::new()),
            ProjectTask::new("task2", run_beta, TaskArgs::new()),
        ];

        let mut runner = TaskRunner::new(&context, tasks, None);
        runner.run().expect("run should succeed");

        assert_eq!(context.commands(), vec!["alpha --all", "beta --all"]);
        assert_eq!(runner.executed(), ["task1", "task2"]);
        assert!(runner.skipped().is_empty());
        assert!(runner.summary().contains("✓ Completed: 2 task(s)"));
        assert!(runner.summary().contains("  - task1"));
        assert!(runner.summary().contains("  - task2"));
        assert!(!runner.summary().contains("⊘ Skipped"));
    }

    #[test]
    fn skips_tasks_in_skip_list() {
        let context = RecordingContext::new();
        let tasks = vec![
            ProjectTask::new("task1", run_alpha, TaskArgs::new()),
            ProjectTask::new("task2", run_beta, TaskArgs::new()),
            ProjectTask::new("task3", run_gamma, TaskArgs::new()),
        ];

        let mut runner = TaskRunner::new(&context, tasks, Some(vec!["task2".to_string()]));
        runner.run().expect("run should succeed");

        assert_eq!(context.commands(), vec!["alpha --all", "gamma --all"]);
        assert_eq!(runner.executed(), ["task1", "task3"]);
        assert_eq!(runner.skipped(), ["task2"]);
        assert!(runner.summary().contains("✓ Completed: 2 task(s)"));
        assert!(runner.summary().contains("⊘ Skipped: 1 task(s)"));
        assert!(runner.summary().contains("  - task2"));
    }

    #[test]
    fn unknown_skip_names_have_no_effect() {
        let context = RecordingContext::new();
        let tasks = vec![ProjectTask::new("task1", run_alpha, TaskArgs::new())];

        let mut runner = TaskRunner::new(&context, tasks, Some(vec!["nonexistent".to_string()]));
        runner.run().expect("run should succeed");

        assert_eq!(runner.executed(), ["task1"]);
        assert!(runner.skipped().is_empty());
    }

    #[test]
    fn skip_matching_is_exact() {
        let context = RecordingContext::new();
        let tasks = vec![ProjectTask::new("ruff.lint", run_alpha, TaskArgs::new())];

        let mut runner = TaskRunner::new(&context, tasks, Some(vec!["ruff".to_string()]));
        runner.run().expect("run should succeed");

        assert_eq!(runner.executed(), ["ruff.lint"]);
        assert!(runner.skipped().is_empty());
    }

    #[test]
    fn empty_task_list_prints_empty_summary() {
        let context = RecordingContext::new();
        let mut runner = TaskRunner::new(&context, Vec::new(), None);
        runner.run().expect("run should succeed");

        assert!(context.commands().is_empty());
        assert!(runner.summary().contains("✓ Completed: 0 task(s)"));
    }

    #[test]
    fn forwards_named_arguments_to_the_action() {
        let context = RecordingContext::new();
        let tasks = vec![ProjectTask::new(
            "fixer.run",
            run_with_fix_flag,
            TaskArgs::new().with("apply_safe_fixes", true),
        )];

        let mut runner = TaskRunner::new(&context, tasks, None);
        runner.run().expect("run should succeed");

        assert_eq!(context.commands(), vec!["fixer --fix"]);
    }

    #[test]
    fn task_error_propagates_and_stops_the_run() {
        let context = RecordingContext::new();
        let tasks = vec![
            ProjectTask::new("task1", always_fails, TaskArgs::new()),
            ProjectTask::new("task2", run_beta, TaskArgs::new()),
        ];

        let mut runner = TaskRunner::new(&context, tasks, None);
        let result = runner.run();

        assert!(matches!(result, Err(ChoreError::Task(_))));
        // The failing task never completed and the rest never started.
        assert!(runner.executed().is_empty());
        assert!(context.commands().is_empty());
    }

    #[test]
    fn duplicate_names_are_processed_independently() {
        let context = RecordingContext::new();
        let tasks = vec![
            ProjectTask::new("task1", run_alpha, TaskArgs::new()),
            ProjectTask::new("task1", run_alpha, TaskArgs::new()),
        ];

        let mut runner = TaskRunner::new(&context, tasks, None);
        runner.run().expect("run should succeed");

        assert_eq!(context.commands(), vec!["alpha --all", "alpha --all"]);
        assert_eq!(runner.executed(), ["task1", "task1"]);
    }

    #[test]
    fn same_inputs_produce_the_same_partition() {
        let build = || {
            vec![
                ProjectTask::new("task1", run_alpha, TaskArgs::new()),
                ProjectTask::new("task2", run_beta, TaskArgs::new()),
            ]
        };
        let skip = Some(vec!["task1".to_string()]);

        let first_context = RecordingContext::new();
        let mut first = TaskRunner::new(&first_context, build(), skip.clone());
        first.run().expect("run should succeed");

        let second_context = RecordingContext::new();
        let mut second = TaskRunner::new(&second_context, build(), skip);
        second.run().expect("run should succeed");

        assert_eq!(first.executed(), second.executed());
        assert_eq!(first.skipped(), second.skipped());
    }

    #[test]
    fn banner_contains_name_between_rules() {
        let text = banner("example.task");
        assert!(text.contains("Running: example.task"));
        assert!(text.contains(&"=".repeat(60)));
    }

    #[test]
    fn flag_treats_missing_and_non_boolean_values_as_false() {
        let args = TaskArgs::new().with("count", 3_i64).with("on", true);
        assert!(args.flag("on"));
        assert!(!args.flag("count"));
        assert!(!args.flag("absent"));
        assert_eq!(args.get("count"), Some(&ArgValue::Int(3)));
        assert_eq!(args.len(), 2);
        assert!(!args.is_empty());
    }
}
