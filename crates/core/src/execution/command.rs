//! Command execution utilities
//!
//! This module runs a single [`CommandDefinition`] as an OS process. The exec
//! and arguments are handed to the OS untouched; any expansion is left to the
//! interpreter being invoked.

use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};

use crate::definition::CommandDefinition;
use crate::results::{CommandResult, PendingCommand};

/// Exit code recorded when the process could not be started at all
pub const SPAWN_FAILURE_EXIT_CODE: i32 = -1;

/// Something that can carry a pending command to its final result
pub trait Invoker {
    fn invoke(&self, pending: PendingCommand, definition: &CommandDefinition) -> CommandResult;
}

/// Settings applied to every spawned process
#[derive(Debug, Clone, Default)]
pub struct ExecutorConfig {
    /// Working directory for spawned commands; inherits the caller's when unset
    pub working_dir: Option<PathBuf>,
}

/// Process-backed [`Invoker`]
#[derive(Debug, Default)]
pub struct CommandExecutor {
    config: ExecutorConfig,
}

impl CommandExecutor {
    pub fn new(config: ExecutorConfig) -> Self {
        Self { config }
    }

    fn build_command(&self, definition: &CommandDefinition) -> Command {
        let mut command = Command::new(&definition.exec);
        command
            .args(&definition.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        if let Some(dir) = &self.config.working_dir {
            command.current_dir(dir);
        }

        command
    }
}

impl Invoker for CommandExecutor {
    fn invoke(&self, pending: PendingCommand, definition: &CommandDefinition) -> CommandResult {
        tracing::debug!(
            command = %definition.name,
            exec = %definition.exec,
            args = ?definition.args,
            "spawning command"
        );

        match self.build_command(definition).output() {
            Ok(output) => {
                let exit_code = exit_code_of(output.status);
                let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
                text.push_str(&String::from_utf8_lossy(&output.stderr));

                tracing::debug!(command = %definition.name, exit_code, "command exited");
                pending.finish(exit_code, text)
            }
            Err(e) => {
                tracing::warn!(
                    command = %definition.name,
                    exec = %definition.exec,
                    error = %e,
                    "failed to start command"
                );
                pending.finish(
                    SPAWN_FAILURE_EXIT_CODE,
                    format!("Failed to execute '{}': {}", definition.exec, e),
                )
            }
        }
    }
}

#[cfg(unix)]
fn exit_code_of(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;

    status
        .code()
        .or_else(|| status.signal().map(|signal| 128 + signal))
        .unwrap_or(SPAWN_FAILURE_EXIT_CODE)
}

#[cfg(not(unix))]
fn exit_code_of(status: ExitStatus) -> i32 {
    status.code().unwrap_or(SPAWN_FAILURE_EXIT_CODE)
}
