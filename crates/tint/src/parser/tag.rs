//! Tag-spec parser.
//!
//! Parses the token before the first `:` inside a tag span.

use crate::color::Color;
use crate::style::{Attributes, Style};

/// A successfully parsed tag spec.
///
/// The style always carries a foreground color; the background is present
/// only when the spec had an `_on_` part.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TagSpec {
    /// The style overrides encoded by the spec.
    pub style: Style,
}

impl TagSpec {
    /// Parse a tag-spec token.
    ///
    /// Grammar: optional `bold_` and `ul_` markers in either order, a
    /// foreground color, and an optional `_on_<color>` background whose
    /// color must differ from the foreground.
    ///
    /// Returns `None` when the token does not denote a valid style. That is
    /// a normal outcome, not an error. The caller renders the span as
    /// literal text.
    ///
    /// # Examples
    ///
    /// ```
    /// use tint::parser::TagSpec;
    /// use tint::{Attributes, Color};
    ///
    /// let spec = TagSpec::parse("bold_ul_red_on_grey").unwrap();
    /// assert_eq!(spec.style.fg, Some(Color::Red));
    /// assert_eq!(spec.style.bg, Some(Color::Grey));
    /// assert_eq!(spec.style.attrs, Attributes::BOLD | Attributes::UNDERLINE);
    ///
    /// assert!(TagSpec::parse("red_on_red").is_none());
    /// assert!(TagSpec::parse("salmon").is_none());
    /// ```
    pub fn parse(token: &str) -> Option<Self> {
        let mut attrs = Attributes::empty();
        let mut rest = token;

        // Attribute markers may appear in either order; the set union makes
        // repeats idempotent.
        loop {
            if let Some(stripped) = rest.strip_prefix("bold_") {
                attrs |= Attributes::BOLD;
                rest = stripped;
            } else if let Some(stripped) = rest.strip_prefix("ul_") {
                attrs |= Attributes::UNDERLINE;
                rest = stripped;
            } else {
                break;
            }
        }

        let (fg_token, bg_token) = match rest.split_once("_on_") {
            Some((fg, bg)) => (fg, Some(bg)),
            None => (rest, None),
        };

        let fg = Color::parse(fg_token).ok()?;
        let bg = match bg_token {
            Some(token) => {
                let bg = Color::parse(token).ok()?;
                if bg == fg {
                    // Identical foreground and background never form a tag.
                    return None;
                }
                Some(bg)
            }
            None => None,
        };

        Some(TagSpec {
            style: Style {
                fg: Some(fg),
                bg,
                attrs,
            },
        })
    }
}
