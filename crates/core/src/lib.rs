//! Nansi Core Library
//!
//! This is the core library for the nansi command sequencer. It runs an
//! ordered list of commands, records each outcome, and skips commands whose
//! declared dependency did not succeed.
//!
//! ## Architecture
//!
//! - [`manager`] - High-level interface used by the CLI
//! - [`execution`] - Process invocation, dependency gating, and the runner
//! - [`definition`] - The static description of one command
//! - [`results`] - Per-command results and the run report
//! - [`configs`] - Command file parsing (JSON or YAML)
//! - [`types`] - Common error types and type aliases
//!
//! ## Usage
//!
//! ```rust,no_run
//! use nansi_core::definition::CommandDefinition;
//! use nansi_core::execution::execute;
//!
//! # fn example() -> nansi_core::types::NansiResult<()> {
//! let report = execute(&[
//!     CommandDefinition::new("mkdir", "/bin/bash").with_args(["-c", "mkdir /tmp/x"]),
//!     CommandDefinition::new("touch", "/bin/bash")
//!         .with_args(["-c", "touch /tmp/x/f"])
//!         .depends_on("mkdir"),
//! ])?;
//!
//! for result in report.results() {
//!     println!("{}: {:?}", result.name, result.status);
//! }
//! # Ok(())
//! # }
//! ```

pub mod configs;
pub mod definition;
pub mod execution;
pub mod manager;
pub mod results;
pub mod types;

// Re-export the main types for easier usage
pub use definition::CommandDefinition;
pub use execution::execute;
pub use results::{CommandResult, CommandStatus, RunOutcome, RunReport};
pub use types::{NansiError, NansiResult};
