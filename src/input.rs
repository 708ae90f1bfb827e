use indexmap::IndexMap;
use log::debug;
use std::cell::OnceCell;

/// Value of a named option: a bare presence flag or a `key=value` string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    Flag,
    Value(String),
}

impl OptionValue {
    pub fn is_flag(&self) -> bool {
        matches!(self, OptionValue::Flag)
    }

    /// The option's string value, or `None` for a bare flag.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::Flag => None,
            OptionValue::Value(value) => Some(value),
        }
    }
}

/// Parses a raw argument vector into a command name, a single positional
/// argument, and a map of named options.
///
/// Tokens after the command name are options iff they start with `-`;
/// `key=value` splits on the first `=`, anything else becomes a presence
/// flag. Only the first post-command token can be the argument, and only
/// when it is not flag-shaped. Extraction is memoized: the first scan wins.
pub struct Input {
    argv: Vec<String>,
    argument: OnceCell<Option<String>>,
    options: OnceCell<IndexMap<String, OptionValue>>,
}

impl Input {
    pub fn new(argv: Vec<String>) -> Self {
        Self {
            argv,
            argument: OnceCell::new(),
            options: OnceCell::new(),
        }
    }

    /// Build from the process argument vector.
    pub fn from_env() -> Self {
        Self::new(std::env::args().collect())
    }

    /// Whether the process was invoked with at least a command name.
    pub fn has_command(&self) -> bool {
        self.argv.len() >= 2
    }

    /// The command name, i.e. the first token after the program name.
    pub fn command(&self) -> Option<&str> {
        self.argv.get(1).map(String::as_str)
    }

    /// The single positional argument, absent when the first post-command
    /// token is flag-shaped or missing.
    pub fn argument(&self) -> Option<&str> {
        self.argument
            .get_or_init(|| {
                self.argv
                    .get(2)
                    .filter(|token| !token.starts_with('-'))
                    .cloned()
            })
            .as_deref()
    }

    /// All named options found after the command name.
    pub fn options(&self) -> &IndexMap<String, OptionValue> {
        self.options.get_or_init(|| {
            let mut options = IndexMap::new();

            for token in self.argv.iter().skip(2) {
                if !token.starts_with('-') {
                    continue;
                }

                let (key, value) = match token.split_once('=') {
                    Some((key, value)) => (key, Some(value)),
                    None => (token.as_str(), None),
                };

                let key = strip_dashes(key).to_string();
                let value = match value {
                    Some(value) => OptionValue::Value(value.to_string()),
                    None => OptionValue::Flag,
                };

                debug!("Parsed option {key}={value:?}");
                options.insert(key, value);
            }

            options
        })
    }

    /// A single named option, or `None` when it was not supplied.
    pub fn option(&self, name: &str) -> Option<&OptionValue> {
        self.options().get(name)
    }
}

/// Strip one leading `--` or `-` from an option key.
fn strip_dashes(key: &str) -> &str {
    key.strip_prefix("--")
        .or_else(|| key.strip_prefix('-'))
        .unwrap_or(key)
}
