use crate::error::{ConsoleError, Result};

/// The eight named ANSI colors plus the terminal default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
    Default = 9,
}

impl Color {
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// A color given as a named enum value, a 256-color palette index, or an
/// RGB triple. Integers and triples convert implicitly so call sites can
/// pass whichever form they have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpec {
    Named(Color),
    Palette(i32),
    Rgb(i32, i32, i32),
}

impl From<Color> for ColorSpec {
    fn from(color: Color) -> Self {
        ColorSpec::Named(color)
    }
}

impl From<i32> for ColorSpec {
    fn from(code: i32) -> Self {
        ColorSpec::Palette(code)
    }
}

impl From<(i32, i32, i32)> for ColorSpec {
    fn from((red, green, blue): (i32, i32, i32)) -> Self {
        ColorSpec::Rgb(red, green, blue)
    }
}

impl From<[i32; 3]> for ColorSpec {
    fn from([red, green, blue]: [i32; 3]) -> Self {
        ColorSpec::Rgb(red, green, blue)
    }
}

/// Extended-color selector introducer.
const CUSTOM: u8 = 8;
/// Palette mode selector.
const PALETTE: u8 = 5;
/// RGB mode selector.
const RGB: u8 = 2;

/// Which plane a color code applies to. Each plane has its own prefix pair
/// for normal and bright rendering (fg 3/9, bg 4/10).
#[derive(Debug, Clone, Copy)]
pub(crate) enum Layer {
    Foreground,
    Background,
}

impl Layer {
    fn normal(self) -> u8 {
        match self {
            Layer::Foreground => 3,
            Layer::Background => 4,
        }
    }

    fn bright(self) -> u8 {
        match self {
            Layer::Foreground => 9,
            Layer::Background => 10,
        }
    }

    /// Code fragment for a named color: the brightness prefix concatenated
    /// with the color's value, e.g. normal green foreground -> "32".
    pub(crate) fn named(self, color: Color, bright: bool) -> String {
        let prefix = if bright { self.bright() } else { self.normal() };

        format!("{prefix}{}", color.code())
    }

    /// Code fragment for a 256-color palette index, e.g. "38;5;196".
    pub(crate) fn palette(self, code: i32) -> Result<String> {
        if !(0..=255).contains(&code) {
            return Err(ConsoleError::InvalidColor);
        }

        Ok(format!("{}{CUSTOM};{PALETTE};{code}", self.normal()))
    }

    /// Code fragment for a true-color value, e.g. "38;2;255;0;127".
    pub(crate) fn rgb(self, red: i32, green: i32, blue: i32) -> Result<String> {
        for component in [red, green, blue] {
            if !(0..=255).contains(&component) {
                return Err(ConsoleError::InvalidColor);
            }
        }

        Ok(format!(
            "{}{CUSTOM};{RGB};{red};{green};{blue}",
            self.normal()
        ))
    }

    /// Code fragment for any color form. Brightness only applies to named
    /// colors; palette and RGB carry their own mode selectors.
    pub(crate) fn colorize(self, spec: ColorSpec, bright: bool) -> Result<String> {
        match spec {
            ColorSpec::Named(color) => Ok(self.named(color, bright)),
            ColorSpec::Palette(code) => self.palette(code),
            ColorSpec::Rgb(red, green, blue) => self.rgb(red, green, blue),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_codes() {
        assert_eq!(Layer::Foreground.named(Color::Green, false), "32");
        assert_eq!(Layer::Foreground.named(Color::Green, true), "92");
        assert_eq!(Layer::Background.named(Color::Red, false), "41");
        assert_eq!(Layer::Background.named(Color::Default, true), "109");
    }

    #[test]
    fn test_palette_codes() {
        assert_eq!(Layer::Foreground.palette(196).unwrap(), "38;5;196");
        assert_eq!(Layer::Background.palette(0).unwrap(), "48;5;0");
        assert!(matches!(
            Layer::Foreground.palette(256),
            Err(ConsoleError::InvalidColor)
        ));
        assert!(matches!(
            Layer::Background.palette(-1),
            Err(ConsoleError::InvalidColor)
        ));
    }

    #[test]
    fn test_rgb_codes() {
        assert_eq!(Layer::Foreground.rgb(255, 0, 127).unwrap(), "38;2;255;0;127");
        assert_eq!(Layer::Background.rgb(1, 2, 3).unwrap(), "48;2;1;2;3");
        assert!(matches!(
            Layer::Foreground.rgb(0, 300, 0),
            Err(ConsoleError::InvalidColor)
        ));
    }

    #[test]
    fn test_color_spec_conversions() {
        assert_eq!(ColorSpec::from(Color::Blue), ColorSpec::Named(Color::Blue));
        assert_eq!(ColorSpec::from(17), ColorSpec::Palette(17));
        assert_eq!(ColorSpec::from((1, 2, 3)), ColorSpec::Rgb(1, 2, 3));
        assert_eq!(ColorSpec::from([4, 5, 6]), ColorSpec::Rgb(4, 5, 6));
    }
}
