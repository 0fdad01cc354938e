//! High-level command file interface
//!
//! This module provides the [`CommandManager`] which serves as the primary
//! interface for the CLI. It loads a command file, exposes a validated
//! execution plan, and runs the sequence.
//!
//! ## Example
//!
//! ```rust,no_run
//! use nansi_core::execution::ExecutorConfig;
//! use nansi_core::manager::CommandManager;
//! use std::path::Path;
//!
//! # fn example() -> nansi_core::types::NansiResult<()> {
//! let manager = CommandManager::load(Path::new("nansifile.json"))?;
//!
//! for step in manager.plan()? {
//!     println!("{}. {}", step.position, step.name);
//! }
//!
//! let report = manager.run(ExecutorConfig::default())?;
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use crate::configs::CommandFile;
use crate::definition::CommandDefinition;
use crate::execution::{validate_definitions, CommandRunner, ExecutorConfig};
use crate::results::RunReport;
use crate::types::NansiResult;

/// One entry of an execution plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedCommand {
    /// 1-based position in the file
    pub position: usize,
    pub name: String,
    pub command_line: String,
    pub depends_on: Option<String>,
}

/// Loaded command file ready to be planned or run
pub struct CommandManager {
    pub file_path: PathBuf,
    pub definitions: Vec<CommandDefinition>,
}

impl CommandManager {
    /// Load and parse a command file
    pub fn load(path: &Path) -> NansiResult<Self> {
        let file = CommandFile::from_path(path)?;
        let definitions = file.definitions()?;
        tracing::debug!(
            path = %path.display(),
            commands = definitions.len(),
            "loaded command file"
        );

        Ok(Self {
            file_path: path.to_path_buf(),
            definitions,
        })
    }

    #[cfg(test)]
    pub(crate) fn from_definitions(definitions: Vec<CommandDefinition>) -> Self {
        Self {
            file_path: PathBuf::new(),
            definitions,
        }
    }

    /// Validate the definitions and describe the order they would run in
    pub fn plan(&self) -> NansiResult<Vec<PlannedCommand>> {
        validate_definitions(&self.definitions)?;

        Ok(self
            .definitions
            .iter()
            .enumerate()
            .map(|(index, def)| PlannedCommand {
                position: index + 1,
                name: def.name.clone(),
                command_line: def.command_line(),
                depends_on: def.depends_on.clone(),
            })
            .collect())
    }

    /// Execute every command and return the report
    pub fn run(&self, config: ExecutorConfig) -> NansiResult<RunReport> {
        CommandRunner::new(config).execute(&self.definitions)
    }
}
