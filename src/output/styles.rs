use super::color::{Color, ColorSpec, Layer};
use crate::error::Result;
use unicode_width::UnicodeWidthStr;

/// Control sequence introducer for SGR sequences.
const CSI: &str = "\x1B[";
/// SGR terminator.
const END: char = 'm';

/// ANSI bold format code.
pub const BOLD: u8 = 1;
/// ANSI muted (faint) format code.
pub const MUTED: u8 = 2;
/// ANSI italic format code.
pub const ITALIC: u8 = 3;
/// ANSI underlined format code.
pub const UNDERLINED: u8 = 4;
/// ANSI invert format code (swaps foreground and background).
pub const INVERT: u8 = 7;

#[derive(Debug, Default, Clone, Copy)]
struct Paddings {
    top: usize,
    right: usize,
    bottom: usize,
    left: usize,
}

/// Incrementally built text styling: format codes, color codes, and
/// padding, consumed by [`Styles::apply`].
///
/// Format and color methods chain; the accumulated state stays in place
/// across `apply` calls until [`Styles::reset`] (or [`Styles::apply_once`],
/// which resets automatically) so a style can be reused or cleared for the
/// next call without leaking prior styling.
#[derive(Default)]
pub struct Styles {
    text: Option<String>,
    formats: Vec<u8>,
    colors: Vec<String>,
    paddings: Paddings,
}

impl Styles {
    pub fn new() -> Self {
        Self::default()
    }

    /// A style with a default text, used when `apply` is given `None`.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn bold(&mut self) -> &mut Self {
        self.formats.push(BOLD);
        self
    }

    pub fn muted(&mut self) -> &mut Self {
        self.formats.push(MUTED);
        self
    }

    pub fn italic(&mut self) -> &mut Self {
        self.formats.push(ITALIC);
        self
    }

    pub fn underlined(&mut self) -> &mut Self {
        self.formats.push(UNDERLINED);
        self
    }

    pub fn invert(&mut self) -> &mut Self {
        self.formats.push(INVERT);
        self
    }

    /// Set the foreground to a named color.
    pub fn fg(&mut self, color: Color, bright: bool) -> &mut Self {
        self.colors.push(Layer::Foreground.named(color, bright));
        self
    }

    /// Set the background to a named color.
    pub fn bg(&mut self, color: Color, bright: bool) -> &mut Self {
        self.colors.push(Layer::Background.named(color, bright));
        self
    }

    /// Set the foreground to a 256-color palette index.
    pub fn fg_palette(&mut self, code: i32) -> Result<&mut Self> {
        self.colors.push(Layer::Foreground.palette(code)?);
        Ok(self)
    }

    /// Set the background to a 256-color palette index.
    pub fn bg_palette(&mut self, code: i32) -> Result<&mut Self> {
        self.colors.push(Layer::Background.palette(code)?);
        Ok(self)
    }

    /// Set the foreground to an RGB value.
    pub fn fg_rgb(&mut self, red: i32, green: i32, blue: i32) -> Result<&mut Self> {
        self.colors.push(Layer::Foreground.rgb(red, green, blue)?);
        Ok(self)
    }

    /// Set the background to an RGB value.
    pub fn bg_rgb(&mut self, red: i32, green: i32, blue: i32) -> Result<&mut Self> {
        self.colors.push(Layer::Background.rgb(red, green, blue)?);
        Ok(self)
    }

    /// Set the foreground from any color form.
    pub fn fg_colorize(&mut self, color: impl Into<ColorSpec>, bright: bool) -> Result<&mut Self> {
        self.colors.push(Layer::Foreground.colorize(color.into(), bright)?);
        Ok(self)
    }

    /// Set the background from any color form.
    pub fn bg_colorize(&mut self, color: impl Into<ColorSpec>, bright: bool) -> Result<&mut Self> {
        self.colors.push(Layer::Background.colorize(color.into(), bright)?);
        Ok(self)
    }

    pub fn padding_left(&mut self, padding: usize) -> &mut Self {
        self.paddings.left = padding;
        self
    }

    pub fn padding_right(&mut self, padding: usize) -> &mut Self {
        self.paddings.right = padding;
        self
    }

    /// Set both left and right padding.
    pub fn padding_x(&mut self, padding: usize) -> &mut Self {
        self.paddings.left = padding;
        self.paddings.right = padding;
        self
    }

    pub fn padding_top(&mut self, padding: usize) -> &mut Self {
        self.paddings.top = padding;
        self
    }

    pub fn padding_bottom(&mut self, padding: usize) -> &mut Self {
        self.paddings.bottom = padding;
        self
    }

    /// Set both top and bottom padding.
    pub fn padding_y(&mut self, padding: usize) -> &mut Self {
        self.paddings.top = padding;
        self.paddings.bottom = padding;
        self
    }

    /// Clear all accumulated formats, colors, and paddings. The instance
    /// then produces the same output as a freshly constructed one.
    pub fn reset(&mut self) -> &mut Self {
        self.formats.clear();
        self.colors.clear();
        self.paddings = Paddings::default();
        self
    }

    /// Wrap the text (or the stored default) between the accumulated start
    /// sequence and the fixed reset sequence, with paddings applied.
    pub fn apply(&self, text: Option<&str>) -> String {
        let text = text.or(self.text.as_deref()).unwrap_or_default();

        format!("{}{}{CSI}0{END}", self.start(), self.pad(text))
    }

    /// Like [`Styles::apply`], then reset all state for the next call.
    pub fn apply_once(&mut self, text: Option<&str>) -> String {
        let applied = self.apply(text);
        self.reset();

        applied
    }

    fn start(&self) -> String {
        let codes = self
            .formats
            .iter()
            .map(ToString::to_string)
            .chain(self.colors.iter().cloned())
            .collect::<Vec<_>>()
            .join(";");

        format!("{CSI}{codes}{END}")
    }

    fn pad(&self, text: &str) -> String {
        let Paddings {
            top,
            right,
            bottom,
            left,
        } = self.paddings;

        if top == 0 && right == 0 && bottom == 0 && left == 0 {
            return text.to_string();
        }

        let padded = format!("{}{text}{}", " ".repeat(left), " ".repeat(right));
        let width = padded.as_str().width();
        let top_line = format!("{}\n", " ".repeat(width)).repeat(top);
        let bottom_line = format!("\n{}", " ".repeat(width)).repeat(bottom);

        format!("{top_line}{padded}{bottom_line}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_color_wraps_text_in_sgr() {
        let mut styles = Styles::new();
        styles.fg(Color::Green, false);

        assert_eq!(styles.apply(Some("OK")), "\x1B[32mOK\x1B[0m");
    }

    #[test]
    fn test_formats_and_colors_join_with_semicolons() {
        let mut styles = Styles::new();
        styles.bold().underlined().fg(Color::Red, true);

        assert_eq!(styles.apply(Some("x")), "\x1B[1;4;91mx\x1B[0m");
    }

    #[test]
    fn test_duplicate_formats_are_preserved() {
        let mut styles = Styles::new();
        styles.bold().bold();

        assert_eq!(styles.apply(Some("x")), "\x1B[1;1mx\x1B[0m");
    }

    #[test]
    fn test_palette_and_rgb_compose() {
        let mut styles = Styles::new();
        styles
            .fg_palette(0)
            .unwrap()
            .bg_palette(2)
            .unwrap();

        assert_eq!(styles.apply(Some("cap")), "\x1B[38;5;0;48;5;2mcap\x1B[0m");

        let mut styles = Styles::new();
        styles.fg_rgb(255, 0, 127).unwrap();

        assert_eq!(styles.apply(Some("x")), "\x1B[38;2;255;0;127mx\x1B[0m");
    }

    #[test]
    fn test_out_of_range_palette_is_rejected() {
        let mut styles = Styles::new();

        assert!(styles.fg_palette(300).is_err());
        assert!(styles.bg_rgb(-1, 0, 0).is_err());
    }

    #[test]
    fn test_default_text_is_used_when_apply_gets_none() {
        let mut styles = Styles::with_text("hello");
        styles.fg(Color::Blue, false);

        assert_eq!(styles.apply(None), "\x1B[34mhello\x1B[0m");
        assert_eq!(styles.apply(Some("bye")), "\x1B[34mbye\x1B[0m");
    }

    #[test]
    fn test_horizontal_padding() {
        let mut styles = Styles::new();
        styles.padding_x(2);

        assert_eq!(styles.apply(Some("hi")), "\x1B[m  hi  \x1B[0m");
    }

    #[test]
    fn test_vertical_padding_matches_padded_width() {
        let mut styles = Styles::new();
        styles.padding_left(1).padding_y(1);

        // Blank lines are as wide as the horizontally padded text.
        assert_eq!(styles.apply(Some("ab")), "\x1B[m   \n ab\n   \x1B[0m");
    }

    #[test]
    fn test_apply_once_resets_to_fresh_state() {
        let mut styles = Styles::new();
        styles.bold().fg(Color::Green, false).padding_x(1);
        let _ = styles.apply_once(Some("first"));

        assert_eq!(styles.apply(Some("next")), Styles::new().apply(Some("next")));
    }

    #[test]
    fn test_explicit_reset_is_idempotent() {
        let mut styles = Styles::new();
        styles.invert().fg(Color::Cyan, false);
        styles.reset().reset();

        assert_eq!(styles.apply(Some("x")), "\x1B[mx\x1B[0m");
    }
}
