//! A small console application framework: register commands by name, parse
//! the invocation into a command, a single argument, and named options,
//! and render colorized text and tables to a terminal stream.
//!
//! ```
//! use conch::{Binding, Console, Input, Output};
//!
//! let input = Input::new(vec![
//!     "app".to_string(),
//!     "greet".to_string(),
//!     "Bob".to_string(),
//!     "--loud".to_string(),
//! ]);
//! let mut console = Console::new(input, Output::stdout());
//!
//! console
//!     .add_command(
//!         "greet",
//!         Binding::callable(|input, output| {
//!             let name = input.argument().unwrap_or("world");
//!             output.success(&format!("Hello, {name}!"))
//!         }),
//!     )
//!     .expect("command name is unique");
//!
//! let status = console.run();
//! assert_eq!(status.code(), 0);
//! ```

pub mod commands;
pub mod console;
pub mod error;
pub mod input;
pub mod logger;
pub mod output;

pub use commands::registry::{CommandDetails, Registry};
pub use commands::resolver::Resolver;
pub use commands::{Binding, Command, CommandSpec};
pub use console::Console;
pub use error::ConsoleError;
pub use input::{Input, OptionValue};
pub use output::color::{Color, ColorSpec};
pub use output::styles::Styles;
pub use output::table::{Alignment, Row, Table};
pub use output::{Output, Status};
