//! Quick tour of the styled renderer and the presets.
//!
//! ```sh
//! cargo run --example tour
//! ```

use std::io;

use tint_rs::{
    Color, Style, print_cmd, print_done, print_error, print_info, print_warning, render,
};

fn main() -> io::Result<()> {
    render(
        "<cyan:Hello!> My name is <bold_ul_red_on_grey:John>. \
         My <bold_green:birthday> is on <bold_magenta_on_grey:Feb 29>!",
        Style::fg(Color::Grey).on(Color::Yellow),
    )?;

    print_info("styling comes from inline tags")?;
    print_warning("an invalid spec falls back to plain text")?;
    render("this stays literal: <not_a_color:oops>", Style::new())?;
    print_cmd("cargo run --example tour")?;
    print_done("tour finished")?;
    print_error("(and this is what an error looks like)")?;
    Ok(())
}
