use std::path::Path;

use anyhow::Result;
use colored::*;
use nansi_core::manager::CommandManager;

pub fn execute(file: &Path) -> Result<()> {
    println!("{} {}", "Execution plan for".bold(), file.display().to_string().cyan());

    let manager = CommandManager::load(file)
        .map_err(|e| anyhow::anyhow!("Failed to load command file: {}", e))?;
    let plan = manager
        .plan()
        .map_err(|e| anyhow::anyhow!("Invalid command file: {}", e))?;

    if plan.is_empty() {
        println!("  {}", "No commands declared".dimmed());
        return Ok(());
    }

    println!("\n{}:", "Execution order".bold());
    for step in plan {
        match step.depends_on {
            Some(dependency) => println!(
                "  {}. {} {} {}",
                step.position,
                step.name.blue().bold(),
                step.command_line,
                format!("(after {})", dependency).dimmed()
            ),
            None => println!(
                "  {}. {} {}",
                step.position,
                step.name.blue().bold(),
                step.command_line
            ),
        }
    }

    Ok(())
}
