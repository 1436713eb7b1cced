//! Top-level render calls.

use std::io::{self, BufWriter, Write};

use tint::{Attributes, Color, Style, StyledMessage};

use crate::writer::write_message;

/// Render a message to stdout with a trailing newline.
///
/// Text outside tags (and inside spans that fail to parse) takes the default
/// style; valid tags merge over it.
///
/// # Examples
///
/// ```no_run
/// use tint::{Color, Style};
///
/// tint_console::render(
///     "<cyan:Hello!> My name is <bold_ul_red_on_grey:John>.",
///     Style::fg(Color::Grey).on(Color::Yellow),
/// )?;
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn render(message: &str, default: Style) -> io::Result<()> {
    render_with(message, default, "\n")
}

/// Render a message to stdout with an explicit terminator.
///
/// An empty terminator gives prompt-style rendering that leaves the cursor
/// on the line.
pub fn render_with(message: &str, default: Style, end: &str) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    render_to(&mut out, message, default, end)?;
    out.flush()
}

/// Resolve a message and write it through any writer.
pub fn render_to<W: Write>(out: &mut W, message: &str, default: Style, end: &str) -> io::Result<()> {
    let resolved = StyledMessage::resolve(message, &default);
    log::trace!("render: {} segment(s)", resolved.segments().len());
    write_message(out, &resolved, end)
}

/// Print a message in a fixed foreground color.
///
/// The generic form of the per-color printers: fixed foreground, no
/// background, pass-through attributes and terminator.
///
/// # Examples
///
/// ```no_run
/// use tint::{Attributes, Color};
///
/// tint_console::print_in(Color::Green, "all good", Attributes::BOLD, "\n")?;
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn print_in(color: Color, message: &str, attrs: Attributes, end: &str) -> io::Result<()> {
    render_with(
        message,
        Style {
            fg: Some(color),
            bg: None,
            attrs,
        },
        end,
    )
}
