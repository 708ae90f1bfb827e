use super::Binding;
use crate::error::{ConsoleError, Result};
use crate::output::table::Row;
use indexmap::indexmap;
use log::debug;
use std::collections::BTreeMap;

/// Placeholder for descriptive fields a binding does not declare.
const PLACEHOLDER: &str = "-";

/// One line of the help table: a command name with its declared metadata,
/// every field already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDetails {
    pub command: String,
    pub description: String,
    pub argument: String,
    pub options: String,
}

impl CommandDetails {
    /// The table row for this entry.
    pub fn into_row(self) -> Row {
        indexmap! {
            "command".to_string() => self.command,
            "description".to_string() => self.description,
            "argument".to_string() => self.argument,
            "options".to_string() => self.options,
        }
    }
}

/// Stores name-to-binding registrations for the lifetime of the process.
/// Names are unique; a duplicate registration is a configuration error.
#[derive(Default)]
pub struct Registry {
    commands: BTreeMap<String, Binding>,
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("commands", &self.commands.keys())
            .finish()
    }
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a binding under a unique name.
    pub fn add(&mut self, name: impl Into<String>, binding: Binding) -> Result<&mut Self> {
        let name = name.into();

        if self.commands.contains_key(&name) {
            return Err(ConsoleError::DuplicateCommand(name));
        }

        debug!("Registered command [{name}]");
        self.commands.insert(name, binding);

        Ok(self)
    }

    pub fn has(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Binding> {
        self.commands.get(name)
    }

    pub fn all(&self) -> &BTreeMap<String, Binding> {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Display entries for every registered command, in name order.
    /// Callables show placeholders for all descriptive fields; class
    /// bindings show their declared spec with placeholders for anything
    /// left empty.
    pub fn detailed(&self) -> Vec<CommandDetails> {
        self.commands
            .iter()
            .map(|(name, binding)| {
                let spec = binding.spec();

                CommandDetails {
                    command: name.clone(),
                    description: spec
                        .map(|spec| spec.description.as_str())
                        .filter(|text| !text.is_empty())
                        .unwrap_or(PLACEHOLDER)
                        .to_string(),
                    argument: spec
                        .and_then(|spec| spec.argument.as_deref())
                        .filter(|text| !text.is_empty())
                        .unwrap_or(PLACEHOLDER)
                        .to_string(),
                    options: spec
                        .map(|spec| spec.options.join(", "))
                        .filter(|text| !text.is_empty())
                        .unwrap_or_else(|| PLACEHOLDER.to_string()),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{Command, CommandSpec};
    use crate::input::Input;
    use crate::output::{Output, Status};

    struct Hello;

    impl Command for Hello {
        fn spec() -> CommandSpec {
            CommandSpec::new("Greet someone")
                .with_argument("name")
                .with_options(["loud", "lang"])
        }

        fn run(&mut self, _input: &Input, _output: &mut Output) -> anyhow::Result<Status> {
            Ok(Status::Success)
        }
    }

    fn callable() -> Binding {
        Binding::callable(|_, _| Ok(Status::Success))
    }

    #[test]
    fn test_add_and_lookup() {
        let mut registry = Registry::new();
        registry.add("build", callable()).unwrap();

        assert!(registry.has("build"));
        assert!(!registry.has("deploy"));
        assert!(registry.get("build").is_some());
        assert_eq!(registry.all().len(), 1);
    }

    #[test]
    fn test_duplicate_registration_is_rejected() {
        let mut registry = Registry::new();
        registry.add("build", callable()).unwrap();

        let err = registry.add("build", callable()).unwrap_err();
        assert!(err.to_string().contains("[build]"));
        assert!(matches!(err, ConsoleError::DuplicateCommand(_)));
    }

    #[test]
    fn test_detailed_callable_shows_placeholders() {
        let mut registry = Registry::new();
        registry.add("quick", callable()).unwrap();

        let details = registry.detailed();
        assert_eq!(details.len(), 1);
        assert_eq!(details[0].command, "quick");
        assert_eq!(details[0].description, "-");
        assert_eq!(details[0].argument, "-");
        assert_eq!(details[0].options, "-");
    }

    #[test]
    fn test_detailed_class_shows_its_spec() {
        let mut registry = Registry::new();
        registry
            .add("hello", Binding::class::<Hello, _>(|| Ok(Hello)))
            .unwrap();

        let details = registry.detailed();
        assert_eq!(details[0].description, "Greet someone");
        assert_eq!(details[0].argument, "name");
        assert_eq!(details[0].options, "loud, lang");
    }

    #[test]
    fn test_detailed_is_sorted_by_name() {
        let mut registry = Registry::new();
        registry.add("zeta", callable()).unwrap();
        registry.add("alpha", callable()).unwrap();
        registry.add("mid", callable()).unwrap();

        let details = registry.detailed();
        let names: Vec<&str> = details
            .iter()
            .map(|details| details.command.as_str())
            .collect();
        assert_eq!(names, vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_details_into_row_preserves_column_order() {
        let details = CommandDetails {
            command: "x".to_string(),
            description: "-".to_string(),
            argument: "-".to_string(),
            options: "-".to_string(),
        };

        let row = details.into_row();
        let columns: Vec<&str> = row.keys().map(String::as_str).collect();
        assert_eq!(columns, vec!["command", "description", "argument", "options"]);
    }
}
