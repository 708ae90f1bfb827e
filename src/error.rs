use thiserror::Error;

/// Errors raised while registering, resolving, or rendering commands.
#[derive(Error, Debug)]
pub enum ConsoleError {
    /// A command name was registered twice.
    #[error("Command name [{0}] has already been used.")]
    DuplicateCommand(String),

    /// Resolution was attempted without a command name on the invocation.
    #[error("Missing command name.")]
    MissingCommand,

    /// A command name was given but nothing is registered under it.
    #[error("Unknown command [{0}]. Did you register this command?")]
    UnregisteredCommand(String),

    /// A command declares a required argument but none was supplied.
    #[error("Missing argument [{argument}] for [{command}] command.")]
    MissingArgument { argument: String, command: String },

    /// Any other failure while constructing a class command.
    #[error("Unable to resolve command [{0}].")]
    UnresolvableCommand(String),

    /// A palette index or RGB component outside 0-255.
    #[error("Invalid color code, only between 0 - 255 is accepted.")]
    InvalidColor,
}

/// Result type alias for fallible framework operations.
pub type Result<T> = std::result::Result<T, ConsoleError>;
