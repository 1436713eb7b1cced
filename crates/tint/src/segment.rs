//! Styled segments and the resolved message.

use crate::style::Style;

/// A run of text with its effective style.
///
/// Segments borrow from the message they were resolved from. The text may be
/// empty: the splitter preserves zero-width literal pieces at span boundaries
/// so ordering and concatenation stay exact.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment<'a> {
    /// The text to write.
    pub text: &'a str,
    /// Effective style after merging the default with any tag override.
    pub style: Style,
}

impl<'a> Segment<'a> {
    /// Create a new segment.
    pub fn new(text: &'a str, style: Style) -> Self {
        Self { text, style }
    }

    /// Returns true if this segment writes no text.
    pub fn is_zero_width(&self) -> bool {
        self.text.is_empty()
    }
}

/// The result of resolving a message against a default style.
///
/// Segments appear in source order. Concatenating their text reconstructs
/// the message with only the tag wrapper syntax removed.
///
/// # Examples
///
/// ```
/// use tint::{Color, Style, StyledMessage};
///
/// let msg = StyledMessage::resolve("<cyan:Hello!> world", &Style::new());
/// assert_eq!(msg.plain_text(), "Hello! world");
/// assert_eq!(msg.segments()[1].style.fg, Some(Color::Cyan));
/// ```
#[derive(Clone, Debug, Default)]
pub struct StyledMessage<'a> {
    segments: Vec<Segment<'a>>,
}

impl<'a> StyledMessage<'a> {
    pub(crate) fn new(segments: Vec<Segment<'a>>) -> Self {
        Self { segments }
    }

    /// Resolve a message into styled segments.
    ///
    /// Never fails: spans that do not parse as tags render as literal text
    /// with the default style. See [`crate::parser::resolve`].
    pub fn resolve(message: &'a str, default: &Style) -> Self {
        crate::parser::resolve(message, default)
    }

    /// The ordered segments.
    pub fn segments(&self) -> &[Segment<'a>] {
        &self.segments
    }

    /// Concatenation of all segment text, styling ignored.
    pub fn plain_text(&self) -> String {
        self.segments.iter().map(|s| s.text).collect()
    }

    /// Returns true if no segment carries any text.
    pub fn is_empty(&self) -> bool {
        self.segments.iter().all(Segment::is_zero_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn segment_zero_width() {
        assert!(Segment::new("", Style::new()).is_zero_width());
        assert!(!Segment::new("x", Style::new()).is_zero_width());
    }

    #[test]
    fn plain_text_concatenates() {
        let msg = StyledMessage::new(vec![
            Segment::new("a", Style::new()),
            Segment::new("", Style::fg(Color::Red)),
            Segment::new("b", Style::new()),
        ]);
        assert_eq!(msg.plain_text(), "ab");
    }

    #[test]
    fn empty_message() {
        let msg = StyledMessage::resolve("", &Style::new());
        assert!(msg.is_empty());
        assert_eq!(msg.plain_text(), "");
    }
}
