//! The fixed color palette.
//!
//! Eight named colors, used for both the foreground and background channels.

use std::fmt;
use std::str::FromStr;

use crate::error::ColorParseError;

/// One of the eight colors the renderer understands.
///
/// The set is closed: anything outside it is rejected at the API boundary
/// rather than passed through as a raw string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Grey,
}

impl Color {
    /// All palette colors, in declaration order.
    pub const ALL: [Color; 8] = [
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
        Color::Grey,
    ];

    /// The lowercase name used in tag specs.
    pub fn name(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
            Color::Grey => "grey",
        }
    }

    /// Parse a color from its lowercase name.
    ///
    /// Tag specs match these names exactly, so the boundary is exact too:
    /// `"cyan"` parses, `"Cyan"` does not.
    ///
    /// # Examples
    ///
    /// ```
    /// use tint::Color;
    ///
    /// assert_eq!(Color::parse("cyan").unwrap(), Color::Cyan);
    /// assert!(Color::parse("chartreuse").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        match input {
            "red" => Ok(Color::Red),
            "green" => Ok(Color::Green),
            "yellow" => Ok(Color::Yellow),
            "blue" => Ok(Color::Blue),
            "magenta" => Ok(Color::Magenta),
            "cyan" => Ok(Color::Cyan),
            "white" => Ok(Color::White),
            "grey" => Ok(Color::Grey),
            _ => Err(ColorParseError::UnknownName(input.to_string())),
        }
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
