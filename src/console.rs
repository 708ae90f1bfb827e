use crate::commands::registry::{CommandDetails, Registry};
use crate::commands::resolver::Resolver;
use crate::commands::Binding;
use crate::input::Input;
use crate::output::table::DEFAULT_HEADER_PADDING;
use crate::output::{Output, Status};
use log::{debug, info};
use std::io;

/// Column padding for the help table.
const HELP_TABLE_PADDING: usize = 7;

/// The application shell: owns the registry, input, and output, and drives
/// one command invocation from argv to a final [`Status`].
///
/// Invoking without a command name prints the registered commands as a
/// table. Every failure along the way is converted into a single red error
/// line; callers map the returned status to a process exit code.
pub struct Console {
    registry: Registry,
    input: Input,
    output: Output,
}

impl std::fmt::Debug for Console {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Console")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

impl Console {
    pub fn new(input: Input, output: Output) -> Self {
        Self {
            registry: Registry::new(),
            input,
            output,
        }
    }

    /// A console reading the process argument vector and writing to stdout.
    pub fn from_env() -> Self {
        Self::new(Input::from_env(), Output::stdout())
    }

    /// Register a command binding. Registering a name twice is a
    /// configuration error surfaced immediately.
    pub fn add_command(
        &mut self,
        name: impl Into<String>,
        binding: Binding,
    ) -> crate::error::Result<&mut Self> {
        self.registry.add(name, binding)?;
        Ok(self)
    }

    /// Clear the screen through the output facade.
    pub fn clear(&mut self) -> io::Result<&mut Self> {
        self.output.clear()?;
        Ok(self)
    }

    /// Run the console application once and report how it ended.
    pub fn run(mut self) -> Status {
        match self.execute() {
            Ok(status) => status,
            Err(err) => self.output.error(&err.to_string()).unwrap_or(Status::Error),
        }
    }

    fn execute(&mut self) -> anyhow::Result<Status> {
        if !self.input.has_command() {
            debug!("No command given, showing the command table");
            return self.show_detailed_commands();
        }

        let resolver = Resolver::new(&self.registry, &self.input)?;
        resolver.resolve(&mut self.output)
    }

    fn show_detailed_commands(&mut self) -> anyhow::Result<Status> {
        if self.registry.is_empty() {
            info!("Registry is empty");
            return self.output.info("No available commands.");
        }

        let rows = self
            .registry
            .detailed()
            .into_iter()
            .map(CommandDetails::into_row)
            .collect();

        self.output.table(
            rows,
            "Available Commands",
            HELP_TABLE_PADDING,
            DEFAULT_HEADER_PADDING,
        )?;

        Ok(Status::Success)
    }
}
