use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use colored::*;
use nansi_core::definition::CommandDefinition;
use nansi_core::execution::ExecutorConfig;
use nansi_core::manager::CommandManager;
use nansi_core::results::{CommandResult, CommandStatus, RunOutcome, RunReport};

pub fn execute(file: &Path, directory: Option<PathBuf>, json: bool) -> Result<ExitCode> {
    let manager = CommandManager::load(file)
        .map_err(|e| anyhow::anyhow!("Failed to load command file: {}", e))?;

    if !json {
        println!("{} {}", "Using command file:".bold(), file.display().to_string().cyan());
    }

    tracing::debug!(
        commands = manager.definitions.len(),
        directory = ?directory,
        "starting run"
    );

    let report = manager
        .run(ExecutorConfig {
            working_dir: directory,
        })
        .map_err(|e| anyhow::anyhow!("Refusing to run: {}", e))?;

    if json {
        println!("{}", report.to_json()?);
    } else {
        print_report(&manager.definitions, &report);
    }

    Ok(match report.outcome() {
        RunOutcome::Succeeded => ExitCode::SUCCESS,
        RunOutcome::Failed => ExitCode::FAILURE,
    })
}

fn print_report(definitions: &[CommandDefinition], report: &RunReport) {
    for (index, (definition, result)) in definitions.iter().zip(report.results()).enumerate() {
        if definition.print_status {
            print_status(index + 1, definition, result);
        }

        if result.status == CommandStatus::Skipped {
            if let Some(dependency) = &definition.depends_on {
                println!(
                    "  {}",
                    format!(
                        "Skipped '{}': dependency '{}' did not succeed",
                        definition.name, dependency
                    )
                    .dimmed()
                );
            }
        } else if definition.print_output && !result.output.is_empty() {
            print!("{}", result.output);
            if !result.output.ends_with('\n') {
                println!();
            }
        }
    }

    let summary = report.summary();
    println!();
    let counts = format!(
        "{} succeeded, {} failed, {} skipped",
        summary.succeeded, summary.failed, summary.skipped
    );
    match report.outcome() {
        RunOutcome::Succeeded => println!("{} {}", "✓".green().bold(), counts.green().bold()),
        RunOutcome::Failed => println!("{} {}", "✗".red().bold(), counts.red().bold()),
    }
}

fn print_status(position: usize, definition: &CommandDefinition, result: &CommandResult) {
    let status = match result.status {
        CommandStatus::Succeeded => "OK".green(),
        CommandStatus::Failed => "FAIL".red(),
        CommandStatus::Skipped => "SKIP".yellow(),
        CommandStatus::Pending => "PENDING".normal(),
    };

    let exit = match (result.status, result.exit_code) {
        (CommandStatus::Failed, Some(code)) => format!(" (exit {})", code).dimmed().to_string(),
        _ => String::new(),
    };

    println!(
        "[{}] [{}][{}] {}{}",
        status,
        position,
        definition.name.bold(),
        definition.command_line(),
        exit
    );
}
