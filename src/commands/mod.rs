pub mod registry;
pub mod resolver;

use crate::input::Input;
use crate::output::{Output, Status};

/// Static metadata a command declares about itself: a description for the
/// help table, the name of its required argument (if any), and the named
/// options it understands.
#[derive(Debug, Clone, Default)]
pub struct CommandSpec {
    pub description: String,
    pub argument: Option<String>,
    pub options: Vec<String>,
}

impl CommandSpec {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Self::default()
        }
    }

    /// Declare the required positional argument.
    pub fn with_argument(mut self, name: impl Into<String>) -> Self {
        self.argument = Some(name.into());
        self
    }

    /// Declare the accepted named options.
    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }
}

/// A command type with declared metadata and a `run` entry point.
pub trait Command {
    /// The command's declared metadata, read once at registration time.
    fn spec() -> CommandSpec
    where
        Self: Sized,
    {
        CommandSpec::default()
    }

    fn run(&mut self, input: &Input, output: &mut Output) -> anyhow::Result<Status>;
}

/// A directly invokable command body.
pub type Callable = Box<dyn Fn(&Input, &mut Output) -> anyhow::Result<Status>>;

/// Produces a ready-to-run command instance with its dependencies
/// supplied. This is the seam where an injection container plugs in; the
/// registry and resolver never know how a command is constructed.
pub type Factory = Box<dyn Fn() -> anyhow::Result<Box<dyn Command>>>;

/// A registered command's underlying implementation: either a bare
/// callable (which declares no metadata) or a command type with a spec
/// snapshot and a construction factory.
pub enum Binding {
    Callable(Callable),
    Class { spec: CommandSpec, factory: Factory },
}

impl Binding {
    pub fn callable<F>(f: F) -> Self
    where
        F: Fn(&Input, &mut Output) -> anyhow::Result<Status> + 'static,
    {
        Binding::Callable(Box::new(f))
    }

    /// Bind a command type, snapshotting its spec now so the help table
    /// never needs to construct it.
    pub fn class<C, F>(factory: F) -> Self
    where
        C: Command + 'static,
        F: Fn() -> anyhow::Result<C> + 'static,
    {
        Binding::Class {
            spec: C::spec(),
            factory: Box::new(move || Ok(Box::new(factory()?) as Box<dyn Command>)),
        }
    }

    pub fn spec(&self) -> Option<&CommandSpec> {
        match self {
            Binding::Callable(_) => None,
            Binding::Class { spec, .. } => Some(spec),
        }
    }
}
