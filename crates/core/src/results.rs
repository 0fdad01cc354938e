//! Result types for command runs
//!
//! This module contains the per-command outcomes produced by the execution
//! engine and the [`RunReport`] that collects them in declared order.

use serde::Serialize;

/// Lifecycle state of a single command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandStatus {
    Pending,
    Succeeded,
    Failed,
    Skipped,
}

impl CommandStatus {
    /// Whether a command depending on this one may run
    pub fn unblocks_dependents(self) -> bool {
        self == CommandStatus::Succeeded
    }
}

/// A command whose turn has come but whose outcome is not known yet.
///
/// Consuming it is the only way to produce a [`CommandResult`], so each
/// command leaves `Pending` exactly once.
#[derive(Debug)]
pub struct PendingCommand {
    name: String,
}

impl PendingCommand {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    #[cfg(test)]
    pub(crate) fn status(&self) -> CommandStatus {
        CommandStatus::Pending
    }

    /// Record a finished process; exit code 0 means success
    pub fn finish(self, exit_code: i32, output: String) -> CommandResult {
        let status = if exit_code == 0 {
            CommandStatus::Succeeded
        } else {
            CommandStatus::Failed
        };
        CommandResult {
            name: self.name,
            status,
            exit_code: Some(exit_code),
            output,
        }
    }

    /// Record a command that never ran because its dependency did not succeed
    pub fn skip(self) -> CommandResult {
        CommandResult {
            name: self.name,
            status: CommandStatus::Skipped,
            exit_code: None,
            output: String::new(),
        }
    }
}

/// Final outcome of one command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandResult {
    pub name: String,
    pub status: CommandStatus,
    pub exit_code: Option<i32>,
    pub output: String,
}

/// Overall outcome of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunOutcome {
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub succeeded: usize,
    pub failed: usize,
    pub skipped: usize,
}

/// Ordered per-command outcomes of one run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    results: Vec<CommandResult>,
}

impl RunReport {
    pub(crate) fn push(&mut self, result: CommandResult) {
        self.results.push(result);
    }

    pub fn results(&self) -> &[CommandResult] {
        &self.results
    }

    pub fn get(&self, name: &str) -> Option<&CommandResult> {
        self.results.iter().find(|r| r.name == name)
    }

    pub fn statuses(&self) -> Vec<CommandStatus> {
        self.results.iter().map(|r| r.status).collect()
    }

    /// Failed if any command failed; skips alone do not fail a run
    pub fn outcome(&self) -> RunOutcome {
        if self
            .results
            .iter()
            .any(|r| r.status == CommandStatus::Failed)
        {
            RunOutcome::Failed
        } else {
            RunOutcome::Succeeded
        }
    }

    pub fn summary(&self) -> RunSummary {
        self.results
            .iter()
            .fold(RunSummary::default(), |mut summary, result| {
                match result.status {
                    CommandStatus::Succeeded => summary.succeeded += 1,
                    CommandStatus::Failed => summary.failed += 1,
                    CommandStatus::Skipped => summary.skipped += 1,
                    CommandStatus::Pending => {}
                }
                summary
            })
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        #[derive(Serialize)]
        struct ReportJson<'a> {
            outcome: RunOutcome,
            summary: RunSummary,
            results: &'a [CommandResult],
        }

        serde_json::to_string_pretty(&ReportJson {
            outcome: self.outcome(),
            summary: self.summary(),
            results: &self.results,
        })
    }
}
