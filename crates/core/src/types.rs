use thiserror::Error;

/// The main error type for nansi operations
#[derive(Debug, Error)]
pub enum NansiError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("{path}: {message}")]
    Load { path: String, message: String },

    #[error("Configuration error: command '{command}' has an empty exec")]
    EmptyExec { command: String },

    #[error("Configuration error: command name '{name}' is declared more than once")]
    DuplicateName { name: String },

    #[error(
        "Configuration error: command '{command}' declares more than one dependency ({list}); only one is supported",
        list = .dependencies.join(", ")
    )]
    MultipleDependencies {
        command: String,
        dependencies: Vec<String>,
    },

    #[error("Configuration error: command '{command}' depends on itself")]
    SelfDependency { command: String },

    #[error(
        "Configuration error: command '{command}' depends on '{depends_on}', which is declared after it"
    )]
    ForwardDependency { command: String, depends_on: String },

    #[error("Configuration error: command '{command}' depends on unknown command '{depends_on}'")]
    UnknownDependency { command: String, depends_on: String },
}

impl NansiError {
    /// Whether this error means the command list was rejected before anything ran
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            NansiError::EmptyExec { .. }
                | NansiError::DuplicateName { .. }
                | NansiError::MultipleDependencies { .. }
                | NansiError::SelfDependency { .. }
                | NansiError::ForwardDependency { .. }
                | NansiError::UnknownDependency { .. }
        )
    }
}

/// Result type alias for nansi operations
pub type NansiResult<T> = Result<T, NansiError>;
