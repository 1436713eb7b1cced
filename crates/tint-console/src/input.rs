//! Blocking line input with styled prompts.

use std::io::{self, BufRead, Write};

use tint::{Color, Style};

use crate::print::render_to;

/// Line that terminates multiline input by default.
pub const DEFAULT_END_SIGNAL: &str = "q!";

/// Render a prompt and read one line from stdin.
///
/// The message is trimmed, rendered without a terminator, and followed by a
/// single space. The returned line carries no trailing newline. End of input
/// yields whatever was read, possibly the empty string.
pub fn prompt(message: &str, default: Style) -> io::Result<String> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    prompt_from(&mut stdin.lock(), &mut stdout.lock(), message, default)
}

/// [`prompt`] over any reader and writer.
pub fn prompt_from<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    message: &str,
    default: Style,
) -> io::Result<String> {
    render_to(out, message.trim(), default, "")?;
    write!(out, " ")?;
    out.flush()?;
    read_line(input)
}

/// Prompt in a fixed foreground color.
///
/// Prompts sit on a grey background, except a grey prompt, which sits on
/// white so the pair stays a valid combination.
pub fn prompt_in(color: Color, message: &str) -> io::Result<String> {
    let bg = if color == Color::Grey {
        Color::White
    } else {
        Color::Grey
    };
    prompt(message, Style::fg(color).on(bg))
}

/// Render the multiline banner and read lines until the default end signal.
pub fn multiline_prompt(prompt_text: &str) -> io::Result<String> {
    multiline_prompt_with(prompt_text, DEFAULT_END_SIGNAL)
}

/// Read lines until a line's trimmed content equals `end_signal`.
///
/// Returns the prior lines joined with `\n`; the terminator line itself is
/// excluded. End of input terminates the read and returns the lines
/// accumulated so far.
pub fn multiline_prompt_with(prompt_text: &str, end_signal: &str) -> io::Result<String> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    multiline_prompt_from(&mut stdin.lock(), &mut stdout.lock(), prompt_text, end_signal)
}

/// [`multiline_prompt_with`] over any reader and writer.
pub fn multiline_prompt_from<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt_text: &str,
    end_signal: &str,
) -> io::Result<String> {
    let banner = format!(
        "<bold_cyan:{prompt_text}>\n\
         <yellow:Enter multi-line text (to finish, in an empty line type '>\
         <bold_magenta:{end_signal}>\
         <yellow:' and hit enter)>:"
    );
    render_to(out, &banner, Style::new(), "\n")?;
    out.flush()?;

    let mut lines = Vec::new();
    loop {
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            log::debug!("end of input after {} line(s)", lines.len());
            break;
        }
        trim_newline(&mut line);
        if line.trim() == end_signal {
            break;
        }
        lines.push(line);
    }
    Ok(lines.join("\n"))
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    trim_newline(&mut line);
    Ok(line)
}

fn trim_newline(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}
