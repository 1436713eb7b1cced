//! Resolver: merges tag styles with the call's default.

use crate::segment::{Segment, StyledMessage};
use crate::style::Style;

use super::splitter::{Piece, Splitter};
use super::tag::TagSpec;

/// Resolve a message into styled segments.
///
/// Literal pieces take the default style verbatim. A bracketed piece whose
/// spec parses takes the tag style merged over the default: attributes are
/// union-combined, the foreground is the tag's, and a missing background
/// falls back to the default background. Anything else renders as literal
/// text with the default style.
///
/// # Examples
///
/// ```
/// use tint::parser::resolve;
/// use tint::{Color, Style};
///
/// let msg = resolve("see <bold_green:this>", &Style::fg(Color::Grey));
/// let styled = msg.segments()[1];
/// assert_eq!(styled.text, "this");
/// assert_eq!(styled.style.fg, Some(Color::Green));
/// ```
pub fn resolve<'a>(message: &'a str, default: &Style) -> StyledMessage<'a> {
    let mut segments = Vec::new();

    for piece in Splitter::new(message) {
        let segment = match piece {
            Piece::Literal(text) => Segment::new(text, *default),
            Piece::Bracketed(interior) => resolve_span(interior, default),
        };
        segments.push(segment);
    }

    StyledMessage::new(segments)
}

/// Resolve one bracket interior: a tag if it has a `:` and a valid spec,
/// literal text with the default style otherwise. The fallback keeps the
/// full interior, colons intact.
fn resolve_span<'a>(interior: &'a str, default: &Style) -> Segment<'a> {
    if let Some((spec, payload)) = interior.split_once(':') {
        if let Some(tag) = TagSpec::parse(spec) {
            return Segment::new(payload, default.apply(&tag.style));
        }
    }
    Segment::new(interior, *default)
}
