use std::path::PathBuf;

use anyhow::Result;
use chore_core::config::{load_config, PipelineConfig, CONFIG_FILE_NAME};
use chore_core::pipelines::CheckOptions;
use chore_core::ShellContext;
use clap::{Parser, Subcommand};

mod commands;

/// Chore - project automation tasks
#[derive(Parser)]
#[command(name = "chore")]
#[command(about = "Run project quality checks and maintenance tasks")]
#[command(version)]
struct Cli {
    /// Path to the project root (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    project: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every project check in pipeline order
    Check {
        /// Let tools apply their safe automatic fixes
        #[arg(long)]
        apply_safe_fixes: bool,
        /// Let ruff apply unsafe fixes when linting
        #[arg(long)]
        apply_unsafe_fixes: bool,
        /// Task names to skip for this run (repeatable)
        #[arg(long)]
        skip: Vec<String>,
    },
    /// Update dependencies and pre-commit hooks
    Update {
        /// Task names to skip for this run (repeatable)
        #[arg(long)]
        skip: Vec<String>,
    },
    /// Ruff linting and formatting
    Ruff {
        #[command(subcommand)]
        ruff_command: RuffCommands,
    },
    /// Type check with mypy
    Mypy,
    /// Pre-commit hooks
    Precommit {
        #[command(subcommand)]
        precommit_command: PrecommitCommands,
    },
    /// Pytest and tox suites
    Tests {
        #[command(subcommand)]
        tests_command: TestsCommands,
    },
    /// Audit dependencies for known vulnerabilities
    Pipaudit,
    /// Check for unused dependencies
    Deptry,
    /// Unused-code checks
    Vulture {
        #[command(subcommand)]
        vulture_command: VultureCommands,
    },
    /// Enforce code complexity thresholds
    Xenon,
    /// Lint GitHub Actions workflows
    Actionlint,
    /// Poetry dependency management
    Poetry {
        #[command(subcommand)]
        poetry_command: PoetryCommands,
    },
    /// Scan the filesystem with trivy
    Trivy,
    /// Verify the devcontainer builds and runs
    Devcontainer {
        /// Only build the image, skip up and exec (fast check)
        #[arg(long)]
        build_only: bool,
        /// Run the full check pipeline inside the container
        #[arg(long)]
        run_project_check: bool,
    },
}

#[derive(Subcommand)]
enum RuffCommands {
    /// Check for code style issues
    Lint {
        #[arg(long)]
        apply_safe_fixes: bool,
        #[arg(long)]
        apply_unsafe_fixes: bool,
    },
    /// Check or apply formatting
    Format {
        #[arg(long)]
        apply_safe_fixes: bool,
    },
}

#[derive(Subcommand)]
enum PrecommitCommands {
    /// Run all hooks
    Check {
        #[arg(long)]
        apply_safe_fixes: bool,
    },
    /// Update hooks to their latest versions
    Update,
}

#[derive(Subcommand)]
enum TestsCommands {
    /// Run unit tests
    Unit,
    /// Run integration tests
    Integration,
    /// Run multi-version testing
    Tox,
}

#[derive(Subcommand)]
enum VultureCommands {
    /// Check for unused code
    Check,
    /// Regenerate the whitelist file
    Whitelist,
}

#[derive(Subcommand)]
enum PoetryCommands {
    /// Update all dependencies
    Update,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(&cli.project)
        .map_err(|e| anyhow::anyhow!("Failed to load {}: {}", CONFIG_FILE_NAME, e))?;
    let context = ShellContext::with_root(&cli.project);

    match cli.command {
        Commands::Check {
            apply_safe_fixes,
            apply_unsafe_fixes,
            skip,
        } => commands::check::execute(
            &context,
            &CheckOptions {
                apply_safe_fixes,
                apply_unsafe_fixes,
            },
            merged_skip(config.check.as_ref(), skip),
        ),
        Commands::Update { skip } => {
            commands::update::execute(&context, merged_skip(config.update.as_ref(), skip))
        }
        Commands::Ruff { ruff_command } => match ruff_command {
            RuffCommands::Lint {
                apply_safe_fixes,
                apply_unsafe_fixes,
            } => commands::tools::ruff_lint(&context, apply_safe_fixes, apply_unsafe_fixes),
            RuffCommands::Format { apply_safe_fixes } => {
                commands::tools::ruff_format(&context, apply_safe_fixes)
            }
        },
        Commands::Mypy => commands::tools::mypy_check(&context),
        Commands::Precommit { precommit_command } => match precommit_command {
            PrecommitCommands::Check { apply_safe_fixes } => {
                commands::tools::precommit_check(&context, apply_safe_fixes)
            }
            PrecommitCommands::Update => commands::tools::precommit_update(&context),
        },
        Commands::Tests { tests_command } => match tests_command {
            TestsCommands::Unit => commands::tools::tests_unit(&context),
            TestsCommands::Integration => commands::tools::tests_integration(&context),
            TestsCommands::Tox => commands::tools::tests_tox(&context),
        },
        Commands::Pipaudit => commands::tools::pipaudit_check(&context),
        Commands::Deptry => commands::tools::deptry_check(&context),
        Commands::Vulture { vulture_command } => match vulture_command {
            VultureCommands::Check => commands::tools::vulture_check(&context),
            VultureCommands::Whitelist => commands::tools::vulture_whitelist(&context),
        },
        Commands::Xenon => commands::tools::xenon_check(&context),
        Commands::Actionlint => commands::tools::actionlint_check(&context),
        Commands::Poetry { poetry_command } => match poetry_command {
            PoetryCommands::Update => commands::tools::poetry_update(&context),
        },
        Commands::Trivy => commands::tools::trivy_check(&context),
        Commands::Devcontainer {
            build_only,
            run_project_check,
        } => commands::tools::devcontainer_check(&context, build_only, run_project_check),
    }
}

/// Combine the configured default skip list with the `--skip` flags.
fn merged_skip(configured: Option<&PipelineConfig>, flags: Vec<String>) -> Option<Vec<String>> {
    let mut skip: Vec<String> = configured
        .and_then(|pipeline| pipeline.skip.clone())
        .unwrap_or_default();
    skip.extend(flags);
    if skip.is_empty() {
        None
    } else {
        Some(skip)
    }
}
