use std::fs;
use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::definition::CommandDefinition;
use crate::types::{NansiError, NansiResult};

#[derive(Debug, Deserialize, Serialize, JsonSchema, Clone)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CommandEntry {
    /// Unique name other commands can depend on. Defaults to `#<position>`.
    #[serde(alias = "label")]
    pub name: Option<String>,
    /// Program or interpreter to invoke
    pub exec: String,
    /// Arguments passed verbatim to `exec`
    #[serde(default)]
    pub args: Vec<String>,
    /// Name of an earlier command that must succeed before this one runs
    #[serde(alias = "depends_on")]
    pub depends_on: Option<String>,
    /// Older spelling of `dependsOn`; at most one name is supported
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prerequisites: Vec<String>,
    #[serde(default = "default_true", alias = "print_status")]
    pub print_status: bool,
    #[serde(default, alias = "print_output")]
    pub print_output: bool,
}

impl CommandEntry {
    /// The single dependency declared through `dependsOn` and/or `prerequisites`
    fn dependency(&self, name: &str) -> NansiResult<Option<String>> {
        let mut dependencies: Vec<String> = Vec::new();
        for dependency in self.depends_on.iter().chain(&self.prerequisites) {
            if !dependencies.contains(dependency) {
                dependencies.push(dependency.clone());
            }
        }

        if dependencies.len() > 1 {
            return Err(NansiError::MultipleDependencies {
                command: name.to_string(),
                dependencies,
            });
        }

        Ok(dependencies.pop())
    }
}

#[derive(Debug, Deserialize, Serialize, JsonSchema, Clone)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CommandFile {
    #[serde(alias = "exec_list")]
    pub exec_list: Vec<CommandEntry>,
}

fn default_true() -> bool {
    true
}

impl CommandFile {
    /// Read a command file, choosing YAML for `.yml`/`.yaml` and JSON otherwise
    pub fn from_path(path: &Path) -> NansiResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| NansiError::Load {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let is_yaml = matches!(
            path.extension().and_then(|ext| ext.to_str()),
            Some("yml") | Some("yaml")
        );

        let parsed = if is_yaml {
            parse_commands_yaml(&content)
        } else {
            parse_commands_json(&content)
        };

        parsed.map_err(|e| NansiError::Load {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Convert file entries into definitions, filling in positional names
    pub fn definitions(&self) -> NansiResult<Vec<CommandDefinition>> {
        self.exec_list
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let name = entry
                    .name
                    .clone()
                    .unwrap_or_else(|| CommandDefinition::positional_name(index));
                let depends_on = entry.dependency(&name)?;
                Ok(CommandDefinition {
                    name,
                    exec: entry.exec.clone(),
                    args: entry.args.clone(),
                    depends_on,
                    print_status: entry.print_status,
                    print_output: entry.print_output,
                })
            })
            .collect()
    }
}

pub fn parse_commands_json(json_str: &str) -> NansiResult<CommandFile> {
    let config: CommandFile = serde_json::from_str(json_str)?;
    Ok(config)
}

pub fn parse_commands_yaml(yaml_str: &str) -> NansiResult<CommandFile> {
    let config: CommandFile = serde_yaml::from_str(yaml_str)?;
    Ok(config)
}

/// JSON Schema describing the command file format
pub fn command_file_schema() -> NansiResult<String> {
    let schema = schemars::schema_for!(CommandFile);
    Ok(serde_json::to_string_pretty(&schema)?)
}
