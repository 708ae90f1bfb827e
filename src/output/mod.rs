pub mod color;
pub mod styles;
pub mod table;

use crossterm::ExecutableCommand;
use crossterm::cursor::MoveTo;
use crossterm::terminal::{Clear, ClearType};
use log::debug;
use std::io::{self, Write};
use std::process::ExitCode;

use color::{Color, ColorSpec};
use styles::Styles;
use table::{Alignment, Row, Table};

/// Severity of a finished run, carrying the process exit contract:
/// success and info exit 0, warnings exit 2, errors exit 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Warning,
    Error,
}

impl Status {
    pub fn code(self) -> u8 {
        match self {
            Status::Success => 0,
            Status::Warning => 2,
            Status::Error => 1,
        }
    }
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        ExitCode::from(status.code())
    }
}

/// Writes styled text, severity messages, and tables to a terminal stream.
///
/// The severity methods colorize their message and hand back the matching
/// [`Status`] instead of terminating the process; the outermost entry point
/// decides when to actually exit.
pub struct Output {
    stream: Box<dyn Write>,
    pub styles: Styles,
}

impl Default for Output {
    fn default() -> Self {
        Self::stdout()
    }
}

impl Output {
    pub fn new(stream: Box<dyn Write>) -> Self {
        Self {
            stream,
            styles: Styles::new(),
        }
    }

    /// An output backed by the process standard output.
    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }

    pub fn write(&mut self, text: &str) -> io::Result<&mut Self> {
        self.stream.write_all(text.as_bytes())?;
        Ok(self)
    }

    pub fn writeln(&mut self, text: &str) -> io::Result<&mut Self> {
        self.stream.write_all(text.as_bytes())?;
        self.newln()
    }

    pub fn newln(&mut self) -> io::Result<&mut Self> {
        self.stream.write_all(b"\n")?;
        Ok(self)
    }

    /// Clear the screen and home the cursor.
    pub fn clear(&mut self) -> io::Result<&mut Self> {
        self.stream
            .execute(Clear(ClearType::All))?
            .execute(MoveTo(0, 0))?;
        Ok(self)
    }

    pub fn success(&mut self, message: &str) -> anyhow::Result<Status> {
        let text = self.colorize(message, Color::Green, true)?;
        self.writeln(&text)?;

        Ok(Status::Success)
    }

    pub fn info(&mut self, message: &str) -> anyhow::Result<Status> {
        let text = self.colorize(message, Color::Blue, true)?;
        self.writeln(&text)?;

        Ok(Status::Success)
    }

    pub fn warning(&mut self, message: &str) -> anyhow::Result<Status> {
        let text = self.colorize(message, Color::Yellow, false)?;
        self.writeln(&text)?;

        Ok(Status::Warning)
    }

    pub fn error(&mut self, message: &str) -> anyhow::Result<Status> {
        let text = self.colorize(message, Color::Red, false)?;
        self.writeln(&text)?;

        Ok(Status::Error)
    }

    /// Apply a foreground color to a message through the style engine,
    /// leaving the engine reset afterwards.
    pub fn colorize(
        &mut self,
        message: &str,
        color: impl Into<ColorSpec>,
        bright: bool,
    ) -> crate::error::Result<String> {
        Ok(self
            .styles
            .reset()
            .fg_colorize(color, bright)?
            .apply_once(Some(message)))
    }

    /// Render rows as a table, captioned when `caption` is non-empty.
    pub fn table(
        &mut self,
        data: Vec<Row>,
        caption: &str,
        padding: usize,
        header_padding: usize,
    ) -> anyhow::Result<()> {
        debug!("Rendering table with {} rows", data.len());
        let mut table = Table::new(data, padding, header_padding);

        if !caption.is_empty() {
            table.caption(caption, Alignment::Center, 0, 2);
        }

        table.render(self)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use indexmap::indexmap;
    use std::cell::RefCell;
    use std::fs;
    use std::rc::Rc;

    /// Shared in-memory stream so tests can assert on what was written.
    #[derive(Clone, Default)]
    pub(crate) struct Sink(Rc<RefCell<Vec<u8>>>);

    impl Sink {
        pub(crate) fn contents(&self) -> String {
            String::from_utf8(self.0.borrow().clone()).unwrap()
        }
    }

    impl Write for Sink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn captured() -> (Output, Sink) {
        let sink = Sink::default();
        (Output::new(Box::new(sink.clone())), sink)
    }

    #[test]
    fn test_severity_messages_carry_their_status() {
        let (mut output, _sink) = captured();

        assert_eq!(output.success("done").unwrap(), Status::Success);
        assert_eq!(output.info("note").unwrap(), Status::Success);
        assert_eq!(output.warning("careful").unwrap(), Status::Warning);
        assert_eq!(output.error("broken").unwrap(), Status::Error);
    }

    #[test]
    fn test_status_exit_codes() {
        assert_eq!(Status::Success.code(), 0);
        assert_eq!(Status::Warning.code(), 2);
        assert_eq!(Status::Error.code(), 1);
    }

    #[test]
    fn test_severity_messages_are_colorized() {
        let (mut output, sink) = captured();

        output.success("done").unwrap();
        output.error("broken").unwrap();

        let written = sink.contents();
        // Bright green for success, normal red for error.
        assert!(written.contains("\x1B[92mdone\x1B[0m\n"));
        assert!(written.contains("\x1B[31mbroken\x1B[0m\n"));
    }

    #[test]
    fn test_write_and_writeln() {
        let (mut output, sink) = captured();

        output.write("a").unwrap().write("b").unwrap();
        output.writeln("c").unwrap();
        output.newln().unwrap();

        assert_eq!(sink.contents(), "abc\n\n");
    }

    #[test]
    fn test_colorize_with_palette_and_rgb() {
        let (mut output, _sink) = captured();

        assert_eq!(
            output.colorize("x", 196, false).unwrap(),
            "\x1B[38;5;196mx\x1B[0m"
        );
        assert_eq!(
            output.colorize("x", (0, 128, 255), false).unwrap(),
            "\x1B[38;2;0;128;255mx\x1B[0m"
        );
        assert!(output.colorize("x", 999, false).is_err());
    }

    #[test]
    fn test_colorize_leaves_the_style_engine_reset() {
        let (mut output, _sink) = captured();

        let first = output.colorize("x", Color::Green, false).unwrap();
        let second = output.colorize("x", Color::Green, false).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_clear_writes_the_clear_and_home_sequences() {
        let (mut output, sink) = captured();

        output.clear().unwrap();

        let written = sink.contents();
        assert!(written.contains("\x1B[2J"));
        assert!(written.contains("\x1B[1;1H"));
    }

    #[test]
    fn test_table_via_facade() {
        let (mut output, sink) = captured();
        let data = vec![indexmap! {
            "command".to_string() => "greet".to_string(),
            "description".to_string() => "Say hello".to_string(),
        }];

        output
            .table(data, "Available Commands", 3, 9)
            .unwrap();

        let written = sink.contents();
        assert!(written.contains("Available Commands"));
        assert!(written.contains("\x1B[32mCommand\x1B[0m"));
        assert!(written.contains("greet"));
    }

    #[test]
    fn test_output_can_write_to_a_file_stream() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let path = file.path().to_path_buf();
        let stream = file.reopen().unwrap();

        let mut output = Output::new(Box::new(stream));
        output.writeln("logged").unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "logged\n");
    }
}
