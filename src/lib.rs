//! Console text styling with inline tags.
//!
//! A facade over the two workspace crates: [`tint`] parses messages like
//! `<cyan:Hello!> My name is <bold_ul_red_on_grey:John>.` into styled
//! segments, and [`tint_console`] renders them to stdout and reads input
//! behind styled prompts.
//!
//! ```no_run
//! use tint_rs::{render, Color, Style};
//!
//! render("<cyan:Hello!> world", Style::fg(Color::Grey))?;
//! # Ok::<(), std::io::Error>(())
//! ```

pub use tint::{Attributes, Color, ColorParseError, Segment, Style, StyledMessage};
pub use tint_console::{
    DEFAULT_END_SIGNAL, multiline_prompt, multiline_prompt_from, multiline_prompt_with, print_cmd,
    print_done, print_error, print_exception, print_in, print_info, print_warning, prompt,
    prompt_from, prompt_in, render, render_to, render_with, write_message,
};
