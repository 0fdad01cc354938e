//! High-level command runner
//!
//! This module walks a validated command list in declared order, gating each
//! command on its dependency's recorded outcome and collecting a
//! [`RunReport`].

use std::collections::HashMap;

use crate::definition::CommandDefinition;
use crate::execution::command::{CommandExecutor, ExecutorConfig, Invoker};
use crate::execution::dependencies::{resolve, validate_definitions, Decision};
use crate::results::{CommandResult, CommandStatus, PendingCommand, RunReport};
use crate::types::NansiResult;

/// Sequential runner that owns the outcome map for the duration of a run
pub struct CommandRunner<I: Invoker = CommandExecutor> {
    invoker: I,
}

impl CommandRunner<CommandExecutor> {
    pub fn new(config: ExecutorConfig) -> Self {
        Self {
            invoker: CommandExecutor::new(config),
        }
    }
}

impl<I: Invoker> CommandRunner<I> {
    pub fn with_invoker(invoker: I) -> Self {
        Self { invoker }
    }

    #[cfg(test)]
    pub(crate) fn invoker(&self) -> &I {
        &self.invoker
    }

    /// Run every definition in order and report each outcome.
    ///
    /// Configuration errors are returned before any command is invoked. A
    /// failing command never stops the run; only its dependents are skipped.
    pub fn execute(&self, definitions: &[CommandDefinition]) -> NansiResult<RunReport> {
        validate_definitions(definitions)?;

        let mut report = RunReport::default();
        let mut statuses: HashMap<String, CommandStatus> = HashMap::new();

        for definition in definitions {
            let result = self.step(definition, &statuses);
            statuses.insert(result.name.clone(), result.status);
            report.push(result);
        }

        let summary = report.summary();
        tracing::info!(
            succeeded = summary.succeeded,
            failed = summary.failed,
            skipped = summary.skipped,
            outcome = ?report.outcome(),
            "run finished"
        );

        Ok(report)
    }

    fn step(
        &self,
        definition: &CommandDefinition,
        statuses: &HashMap<String, CommandStatus>,
    ) -> CommandResult {
        let pending = PendingCommand::new(definition.name.clone());

        match resolve(definition, statuses) {
            Decision::Run => {
                let result = self.invoker.invoke(pending, definition);
                tracing::info!(
                    command = %result.name,
                    status = ?result.status,
                    exit_code = ?result.exit_code,
                    "command finished"
                );
                result
            }
            Decision::Skip { blocked_by } => {
                tracing::info!(
                    command = %pending.name(),
                    dependency = %blocked_by,
                    "skipping command, dependency did not succeed"
                );
                pending.skip()
            }
        }
    }
}

/// Run `definitions` with the process-backed executor and default settings
pub fn execute(definitions: &[CommandDefinition]) -> NansiResult<RunReport> {
    CommandRunner::new(ExecutorConfig::default()).execute(definitions)
}
