//! Command dependency management
//!
//! This module decides whether a command may run given the outcomes recorded
//! so far, and rejects command lists whose dependency links cannot be
//! satisfied before anything is executed.

use std::collections::{HashMap, HashSet};

use crate::definition::CommandDefinition;
use crate::results::CommandStatus;
use crate::types::{NansiError, NansiResult};

/// Whether a command should be invoked or recorded as skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Run,
    /// The named dependency did not succeed
    Skip { blocked_by: String },
}

/// Decide whether `definition` may run given the statuses recorded so far.
///
/// A dependency that failed or was itself skipped blocks the command, which
/// makes skips cascade down a chain. Definitions are validated before a run,
/// so a dependency missing from `statuses` is treated as not succeeded.
pub fn resolve(
    definition: &CommandDefinition,
    statuses: &HashMap<String, CommandStatus>,
) -> Decision {
    match &definition.depends_on {
        None => Decision::Run,
        Some(dependency) => match statuses.get(dependency) {
            Some(status) if status.unblocks_dependents() => Decision::Run,
            _ => Decision::Skip {
                blocked_by: dependency.clone(),
            },
        },
    }
}

/// Check a command list for problems that must stop the run before it starts
pub fn validate_definitions(definitions: &[CommandDefinition]) -> NansiResult<()> {
    let all_names: HashSet<&str> = definitions.iter().map(|d| d.name.as_str()).collect();
    let mut declared: HashSet<&str> = HashSet::new();

    for definition in definitions {
        if definition.exec.trim().is_empty() {
            return Err(NansiError::EmptyExec {
                command: definition.name.clone(),
            });
        }

        if !declared.insert(definition.name.as_str()) {
            return Err(NansiError::DuplicateName {
                name: definition.name.clone(),
            });
        }

        if let Some(dependency) = &definition.depends_on {
            if dependency == &definition.name {
                return Err(NansiError::SelfDependency {
                    command: definition.name.clone(),
                });
            }

            if !declared.contains(dependency.as_str()) {
                let command = definition.name.clone();
                let depends_on = dependency.clone();
                return Err(if all_names.contains(dependency.as_str()) {
                    NansiError::ForwardDependency {
                        command,
                        depends_on,
                    }
                } else {
                    NansiError::UnknownDependency {
                        command,
                        depends_on,
                    }
                });
            }
        }
    }

    Ok(())
}
