use anyhow::Result;
use chore_core::context::ExecutionContext;
use chore_core::pipelines;
use colored::*;

pub fn execute(context: &dyn ExecutionContext, skip: Option<Vec<String>>) -> Result<()> {
    println!("{}", "Updating dependencies and hooks".bold());

    pipelines::update(context, skip)
        .map_err(|e| anyhow::anyhow!("Update pipeline failed: {}", e))?;

    println!();
    println!(
        "{} {}",
        "✓".green().bold(),
        "All updates completed successfully!".green().bold()
    );

    Ok(())
}
