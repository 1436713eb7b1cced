//! Style types: the attribute set and the combined style.

use bitflags::bitflags;

use crate::color::Color;

bitflags! {
    /// Bitflags for the two binary text attributes.
    ///
    /// Attributes are union-combined when styles merge: a flag can be added
    /// but never removed within a single span's resolution.
    ///
    /// # Example
    ///
    /// ```
    /// use tint::Attributes;
    ///
    /// let mut attrs = Attributes::empty();
    /// attrs |= Attributes::BOLD;
    ///
    /// assert!(attrs.contains(Attributes::BOLD));
    /// assert!(!attrs.contains(Attributes::UNDERLINE));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Attributes: u8 {
        /// Bold/increased intensity.
        const BOLD      = 0b0000_0001;
        /// Underlined text.
        const UNDERLINE = 0b0000_0010;
    }
}

/// Complete style for a rendered segment.
///
/// An absent color means "inherit the terminal default".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Style {
    /// Foreground (text) color.
    pub fg: Option<Color>,
    /// Background color.
    pub bg: Option<Color>,
    /// Text attributes.
    pub attrs: Attributes,
}

impl Style {
    /// Create a new empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// A style with just a foreground color.
    ///
    /// # Examples
    ///
    /// ```
    /// use tint::{Color, Style};
    ///
    /// let style = Style::fg(Color::Red).on(Color::Grey).bold();
    /// assert_eq!(style.fg, Some(Color::Red));
    /// assert_eq!(style.bg, Some(Color::Grey));
    /// ```
    pub fn fg(color: Color) -> Self {
        Style {
            fg: Some(color),
            ..Self::default()
        }
    }

    /// Set the background color.
    pub fn on(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    /// Add the bold attribute.
    pub fn bold(mut self) -> Self {
        self.attrs |= Attributes::BOLD;
        self
    }

    /// Add the underline attribute.
    pub fn underline(mut self) -> Self {
        self.attrs |= Attributes::UNDERLINE;
        self
    }

    /// Returns true if no style properties are set.
    pub fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attrs.is_empty()
    }

    /// Apply another style on top of this one.
    ///
    /// Present colors in `overlay` override colors in `self`; attributes are
    /// OR'd together.
    pub fn apply(&self, overlay: &Style) -> Style {
        Style {
            fg: overlay.fg.or(self.fg),
            bg: overlay.bg.or(self.bg),
            attrs: self.attrs | overlay.attrs,
        }
    }
}
