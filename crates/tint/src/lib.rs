//! Inline tag parser and style resolver for console text styling.
//!
//! This crate parses messages with inline style markers, converting text
//! like `<cyan:Hello!> My name is <bold_ul_red_on_grey:John>.` into styled
//! segments that a console layer can render.
//!
//! # Overview
//!
//! A tag span sits between `<` and `>`. The part before its first `:` is the
//! tag spec; the rest is the payload that gets styled:
//!
//! - `<cyan:Hello!>` - cyan foreground
//! - `<bold_green:birthday>` - bold, green foreground
//! - `<ul_magenta_on_grey:note>` - underlined, magenta on grey
//!
//! The spec grammar is an optional `bold_` marker, an optional `ul_` marker
//! (either order), a foreground color, and an optional `_on_<color>`
//! background. Colors come from a fixed eight-color palette. A span whose
//! spec does not parse (for example an unknown color name, or a span with no
//! `:` at all) renders as literal text with the call's default style, and so
//! does a spec whose foreground and background are the same color. That
//! fallback is deliberate: malformed tags are content, not errors.
//!
//! # Usage
//!
//! ```
//! use tint::{Color, Style, StyledMessage};
//!
//! let default = Style::fg(Color::Grey);
//! let msg = StyledMessage::resolve("<cyan:Hello!> My name is <bold_ul_red_on_grey:John>.", &default);
//!
//! assert_eq!(msg.plain_text(), "Hello! My name is John.");
//!
//! // Work with individual types
//! let style = Style::fg(Color::Red).on(Color::Grey).bold();
//! let color = Color::parse("magenta").unwrap();
//! # let _ = (style, color);
//! ```

pub mod color;
pub mod error;
pub mod parser;
pub mod segment;
pub mod style;

// Re-export main types at crate root
pub use color::Color;
pub use error::ColorParseError;
pub use segment::{Segment, StyledMessage};
pub use style::{Attributes, Style};
