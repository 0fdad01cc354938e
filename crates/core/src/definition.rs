/// Static description of one step in a command sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDefinition {
    pub name: String,
    pub exec: String,
    pub args: Vec<String>,
    pub depends_on: Option<String>,
    pub print_status: bool,
    pub print_output: bool,
}

impl CommandDefinition {
    pub fn new(name: impl Into<String>, exec: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            exec: exec.into(),
            args: Vec::new(),
            depends_on: None,
            print_status: true,
            print_output: false,
        }
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn depends_on(mut self, name: impl Into<String>) -> Self {
        self.depends_on = Some(name.into());
        self
    }

    /// Name given to a command declared without one (`index` is zero-based)
    pub fn positional_name(index: usize) -> String {
        format!("#{}", index + 1)
    }

    /// The exec followed by its arguments, space separated
    pub fn command_line(&self) -> String {
        if self.args.is_empty() {
            self.exec.clone()
        } else {
            format!("{} {}", self.exec, self.args.join(" "))
        }
    }
}
