use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

/// Nansi - Declarative, dependency-gated command sequences
#[derive(Parser)]
#[command(name = "nansi")]
#[command(about = "Run a declared sequence of commands, skipping those whose dependency failed")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every command in a command file
    Run {
        /// Path to the command file (JSON, or YAML for .yml/.yaml)
        file: PathBuf,
        /// Working directory for the commands (defaults to the current directory)
        #[arg(short = 'C', long)]
        directory: Option<PathBuf>,
        /// Print the run report as JSON instead of status lines
        #[arg(long)]
        json: bool,
    },
    /// Validate a command file and show the execution order without running it
    Plan {
        /// Path to the command file
        file: PathBuf,
    },
    /// Print the JSON Schema of the command file format
    Schema,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_env("NANSI_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Run {
            file,
            directory,
            json,
        } => commands::run::execute(&file, directory, json),
        Commands::Plan { file } => commands::plan::execute(&file).map(|()| ExitCode::SUCCESS),
        Commands::Schema => commands::schema::execute().map(|()| ExitCode::SUCCESS),
    }
}
