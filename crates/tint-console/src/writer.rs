//! Style application: writes resolved segments through crossterm.

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Attribute, SetAttribute, SetBackgroundColor, SetForegroundColor};

use tint::{Attributes, Color, Style, StyledMessage};

/// Map a palette color onto the terminal's classic color slots.
///
/// `White` takes the 37 slot and `Grey` bright black.
fn terminal_color(color: Color) -> crossterm::style::Color {
    use crossterm::style::Color as Term;

    match color {
        Color::Red => Term::DarkRed,
        Color::Green => Term::DarkGreen,
        Color::Yellow => Term::DarkYellow,
        Color::Blue => Term::DarkBlue,
        Color::Magenta => Term::DarkMagenta,
        Color::Cyan => Term::DarkCyan,
        Color::White => Term::Grey,
        Color::Grey => Term::DarkGrey,
    }
}

/// Write a resolved message to `out`, followed by `end`.
///
/// Escape codes are emitted only when the effective style changes between
/// consecutive segments, so a message with no styling at all produces
/// byte-exact plain output. Zero-width segments write nothing. The terminal
/// style is reset before the terminator iff anything was applied.
pub fn write_message<W: Write>(
    out: &mut W,
    message: &StyledMessage<'_>,
    end: &str,
) -> io::Result<()> {
    let mut applied = Style::new();

    for segment in message.segments() {
        if segment.is_zero_width() {
            continue;
        }
        if segment.style != applied {
            set_style(out, &segment.style)?;
            applied = segment.style;
        }
        write!(out, "{}", segment.text)?;
    }

    if !applied.is_empty() {
        queue!(out, SetAttribute(Attribute::Reset))?;
    }
    write!(out, "{end}")?;
    Ok(())
}

/// Reset the terminal style, then apply `style` from the known baseline.
fn set_style<W: Write>(out: &mut W, style: &Style) -> io::Result<()> {
    queue!(out, SetAttribute(Attribute::Reset))?;
    if style.attrs.contains(Attributes::BOLD) {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if style.attrs.contains(Attributes::UNDERLINE) {
        queue!(out, SetAttribute(Attribute::Underlined))?;
    }
    if let Some(fg) = style.fg {
        queue!(out, SetForegroundColor(terminal_color(fg)))?;
    }
    if let Some(bg) = style.bg {
        queue!(out, SetBackgroundColor(terminal_color(bg)))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(message: &str, default: Style, end: &str) -> Vec<u8> {
        let resolved = StyledMessage::resolve(message, &default);
        let mut out = Vec::new();
        write_message(&mut out, &resolved, end).unwrap();
        out
    }

    #[test]
    fn unstyled_output_is_byte_exact() {
        assert_eq!(rendered("Hello World", Style::new(), "\n"), b"Hello World\n");
        assert_eq!(rendered("", Style::new(), ""), b"");
    }

    #[test]
    fn styled_output_contains_escapes_and_text() {
        let out = rendered("<cyan:hi>", Style::new(), "\n");
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\x1b["));
        assert!(text.contains("hi"));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn plain_prefix_stays_unescaped() {
        let out = rendered("plain <red:x>", Style::new(), "");
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("plain "));
    }

    #[test]
    fn zero_width_segments_emit_nothing() {
        // An empty payload still parses as a tag, but writes no codes.
        assert_eq!(rendered("<cyan:>", Style::new(), "\n"), b"\n");
    }

    #[test]
    fn custom_terminator() {
        assert_eq!(rendered("x", Style::new(), ""), b"x");
        assert_eq!(rendered("x", Style::new(), "!\n"), b"x!\n");
    }
}
