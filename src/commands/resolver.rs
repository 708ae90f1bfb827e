use super::registry::Registry;
use super::{Binding, CommandSpec};
use crate::error::ConsoleError;
use crate::input::Input;
use crate::output::{Output, Status};
use log::{debug, warn};

/// Looks up the invoked command and dispatches it.
///
/// Construction is the validation phase: it fails when no command name was
/// given or the name has no binding. [`Resolver::resolve`] is the dispatch
/// phase: callables are invoked directly; class bindings first have their
/// required argument checked, then are built through their factory and
/// run. A missing argument propagates as-is since it is actionable for the
/// user; any factory failure is normalized to a stable unresolvable-command
/// error instead of leaking construction internals.
pub struct Resolver<'a> {
    name: &'a str,
    binding: &'a Binding,
    input: &'a Input,
}

impl std::fmt::Debug for Resolver<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl<'a> Resolver<'a> {
    pub fn new(registry: &'a Registry, input: &'a Input) -> crate::error::Result<Self> {
        let name = input
            .command()
            .filter(|name| !name.is_empty())
            .ok_or(ConsoleError::MissingCommand)?;

        let binding = registry
            .get(name)
            .ok_or_else(|| ConsoleError::UnregisteredCommand(name.to_string()))?;

        Ok(Self {
            name,
            binding,
            input,
        })
    }

    pub fn resolve(&self, output: &mut Output) -> anyhow::Result<Status> {
        match self.binding {
            Binding::Callable(callable) => {
                debug!("Dispatching callable command [{}]", self.name);
                callable(self.input, output)
            }
            Binding::Class { spec, factory } => {
                self.validate_argument(spec)?;

                debug!("Constructing command [{}]", self.name);
                let mut command = factory().map_err(|err| {
                    warn!("Construction of [{}] failed: {err}", self.name);
                    ConsoleError::UnresolvableCommand(self.name.to_string())
                })?;

                command.run(self.input, output)
            }
        }
    }

    fn validate_argument(&self, spec: &CommandSpec) -> crate::error::Result<()> {
        match spec.argument.as_deref() {
            Some(argument) if !argument.is_empty() && self.input.argument().is_none() => {
                Err(ConsoleError::MissingArgument {
                    argument: argument.to_string(),
                    command: self.name.to_string(),
                })
            }
            _ => Ok(()),
        }
    }
}
