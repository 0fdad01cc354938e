//! Command file parsing
//!
//! Command files declare an ordered `execList` in JSON or YAML.

pub mod commands;

pub use commands::{command_file_schema, CommandEntry, CommandFile};
