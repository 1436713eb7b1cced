//! Console rendering and input for tag-styled messages.
//!
//! This crate is the I/O half of the styling library: [`tint`] parses a
//! message into styled segments, and the functions here write those segments
//! to stdout through the terminal's escape-code styling, or read input back
//! behind a styled prompt.
//!
//! # Usage
//!
//! ```no_run
//! use tint::{Color, Style};
//! use tint_console::{multiline_prompt, print_done, prompt_in, render};
//!
//! render("<cyan:Hello!> world", Style::new())?;
//! print_done("setup finished")?;
//!
//! let name = prompt_in(Color::Green, "Your name?")?;
//! let notes = multiline_prompt("Any notes?")?;
//! # let _ = (name, notes);
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//! All output goes through blocking, synchronous writes to stdout; input
//! reads block until a line arrives or input ends. The `*_to` / `*_from`
//! variants take explicit writers and readers.

pub mod input;
pub mod presets;
pub mod print;
pub mod writer;

// Re-export the public surface at crate root
pub use input::{
    DEFAULT_END_SIGNAL, multiline_prompt, multiline_prompt_from, multiline_prompt_with, prompt,
    prompt_from, prompt_in,
};
pub use presets::{print_cmd, print_done, print_error, print_exception, print_info, print_warning};
pub use print::{print_in, render, render_to, render_with};
pub use writer::write_message;
