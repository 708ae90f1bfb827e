use super::Output;
use super::color::Color;
use indexmap::IndexMap;
use log::debug;
use unicode_width::UnicodeWidthStr;

/// A single table row: column name to display value, in column order.
pub type Row = IndexMap<String, String>;

/// Caption alignment within the table's total width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    Left,
    Right,
    #[default]
    Center,
}

#[derive(Debug)]
struct Caption {
    text: String,
    alignment: Alignment,
    fg: i32,
    bg: i32,
}

/// Renders rows of key-value data as an aligned table with colorized
/// headers and an optional caption banner.
///
/// Headers derive from the first row's keys; rows are assumed structurally
/// homogeneous. Column widths are computed from visible lengths, so
/// embedded escape sequences do not skew alignment; the header padding
/// compensates for the escape bytes the header colorizing adds.
pub struct Table {
    data: Vec<Row>,
    padding: usize,
    header_padding: usize,
    caption: Option<Caption>,
}

/// Spaces appended to every column beyond its longest cell.
pub const DEFAULT_PADDING: usize = 3;

/// Extra header width covering the bytes of the green colorize sequence.
pub const DEFAULT_HEADER_PADDING: usize = 9;

impl Table {
    pub fn new(data: Vec<Row>, padding: usize, header_padding: usize) -> Self {
        Self {
            data,
            padding,
            header_padding,
            caption: None,
        }
    }

    /// Set a caption printed above the headers, width-matched to the table
    /// and filled with the given palette colors.
    pub fn caption(
        &mut self,
        text: impl Into<String>,
        alignment: Alignment,
        fg: i32,
        bg: i32,
    ) -> &mut Self {
        self.caption = Some(Caption {
            text: text.into(),
            alignment,
            fg,
            bg,
        });

        self
    }

    /// Print the caption, header row, and body. Empty data produces no
    /// output at all.
    pub fn render(&self, output: &mut Output) -> anyhow::Result<()> {
        if self.data.is_empty() {
            debug!("Table has no rows, skipping render");
            return Ok(());
        }

        let widths = self.column_widths();

        self.print_caption(output, &widths)?;
        self.print_headers(output, &widths)?;
        self.print_body(output, &widths)?;

        Ok(())
    }

    /// Width of each column: the longest visible length among the header
    /// and every value, plus the column padding.
    fn column_widths(&self) -> IndexMap<&str, usize> {
        let mut widths: IndexMap<&str, usize> = IndexMap::new();

        for column in self.data[0].keys() {
            widths.insert(column, visible_width(&title_case(column)));
        }

        for row in &self.data {
            for (column, value) in row {
                let length = visible_width(value);
                if let Some(width) = widths.get_mut(column.as_str()) {
                    *width = (*width).max(length);
                }
            }
        }

        for width in widths.values_mut() {
            *width += self.padding;
        }

        widths
    }

    fn print_caption(
        &self,
        output: &mut Output,
        widths: &IndexMap<&str, usize>,
    ) -> anyhow::Result<()> {
        let Some(caption) = &self.caption else {
            return Ok(());
        };

        let total: usize = widths.values().sum();
        let padded = align(&caption.text, caption.alignment, total);
        let styled = output
            .styles
            .reset()
            .fg_palette(caption.fg)?
            .bg_palette(caption.bg)?
            .apply_once(Some(&padded));

        output.writeln(&styled)?;

        Ok(())
    }

    fn print_headers(
        &self,
        output: &mut Output,
        widths: &IndexMap<&str, usize>,
    ) -> anyhow::Result<()> {
        for (column, width) in widths {
            let colored = output.colorize(&title_case(column), Color::Green, false)?;
            let cell = pad_chars(&colored, width + self.header_padding);
            output.write(&cell)?;
        }
        output.newln()?;

        Ok(())
    }

    fn print_body(&self, output: &mut Output, widths: &IndexMap<&str, usize>) -> anyhow::Result<()> {
        for row in &self.data {
            for (column, width) in widths {
                let value = row.get(*column).map(String::as_str).unwrap_or_default();
                output.write(&pad_chars(value, *width))?;
            }
            output.newln()?;
        }

        Ok(())
    }
}

/// Pad with trailing spaces to `width` characters.
fn pad_chars(text: &str, width: usize) -> String {
    format!("{text:<width$}")
}

fn align(text: &str, alignment: Alignment, width: usize) -> String {
    let length = text.chars().count();
    if length >= width {
        return text.to_string();
    }

    let extra = width - length;
    match alignment {
        Alignment::Left => format!("{}{}", text, " ".repeat(extra)),
        Alignment::Right => format!("{}{}", " ".repeat(extra), text),
        // The right side takes the odd space.
        Alignment::Center => {
            let left = extra / 2;
            format!("{}{}{}", " ".repeat(left), text, " ".repeat(extra - left))
        }
    }
}

/// Uppercase the first letter of each whitespace-separated word.
pub(crate) fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;

    for c in text.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            out.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            out.push(c);
        }
    }

    out
}

/// Display width of the text with SGR escape sequences discounted.
pub(crate) fn visible_width(text: &str) -> usize {
    strip_sgr(text).width()
}

fn strip_sgr(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\x1B' && chars.peek() == Some(&'[') {
            chars.next();
            // Parameter bytes run up to the final byte, usually `m`.
            for c in chars.by_ref() {
                if !c.is_ascii_digit() && c != ';' {
                    break;
                }
            }
            continue;
        }
        out.push(c);
    }

    out
}
