//! Command execution module
//!
//! This module handles the actual execution of command sequences including
//! process invocation, dependency gating, and result reporting.

pub mod command;
pub mod dependencies;
pub mod runner;

pub use command::{CommandExecutor, ExecutorConfig, Invoker, SPAWN_FAILURE_EXIT_CODE};
pub use dependencies::{resolve, validate_definitions, Decision};
pub use runner::{execute, CommandRunner};
