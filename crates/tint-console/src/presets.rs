//! Symbol-prefixed status presets.
//!
//! Fixed symbol/color/attribute combinations layered on the renderer.
//! Messages pass through the tag parser, so inline tags inside them still
//! work.

use std::io;

use tint::{Color, Style};

use crate::print::{render, render_with};

/// Print an error message in red on grey with a cross symbol.
pub fn print_error(message: &str) -> io::Result<()> {
    render(
        &format!("\u{274C}  {message}"),
        Style::fg(Color::Red).on(Color::Grey),
    )
}

/// Print an error's full type path and message in red on grey.
///
/// The type path plays the role of an exception class name:
/// `std::io::Error: entity not found`.
pub fn print_exception<E: std::error::Error + ?Sized>(error: &E) -> io::Result<()> {
    render(
        &format!("\u{274C}  {}: {}", std::any::type_name::<E>(), error),
        Style::fg(Color::Red).on(Color::Grey),
    )
}

/// Print a warning message in yellow on grey with a warning sign.
pub fn print_warning(message: &str) -> io::Result<()> {
    render(
        &format!("\u{26A0}  {message}"),
        Style::fg(Color::Yellow).on(Color::Grey),
    )
}

/// Print an informational message in bold cyan with a thunderbolt.
pub fn print_info(message: &str) -> io::Result<()> {
    render(&format!("\u{26A1} {message}"), Style::fg(Color::Cyan).bold())
}

/// Print a completion message in bold green with a check mark.
pub fn print_done(message: &str) -> io::Result<()> {
    render(&format!("\u{2705}  {message}"), Style::fg(Color::Green).bold())
}

/// Announce a command in bold magenta, then print it in bold cyan.
pub fn print_cmd(command: &str) -> io::Result<()> {
    render_with("Running cmd \u{2B9A} ", Style::fg(Color::Magenta).bold(), "")?;
    render(command, Style::fg(Color::Cyan).bold())
}
