use anyhow::Result;
use chore_core::context::ExecutionContext;
use chore_core::pipelines::{self, CheckOptions};
use colored::*;

pub fn execute(
    context: &dyn ExecutionContext,
    options: &CheckOptions,
    skip: Option<Vec<String>>,
) -> Result<()> {
    println!("{}", "Running project checks".bold());

    pipelines::check(context, options, skip)
        .map_err(|e| anyhow::anyhow!("Check pipeline failed: {}", e))?;

    println!();
    println!(
        "{} {}",
        "✓".green().bold(),
        "All checks completed successfully!".green().bold()
    );

    Ok(())
}
