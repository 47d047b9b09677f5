//! The three screens behind the tab bar.
//!
//! - `home`: quote of the day, owns the selected quote.
//! - `diary`: today's entry and two 0..=10 ratings.
//! - `profile`: profile form and image picker.
use std::io::{self, Write};

pub mod diary;
pub mod home;
pub mod profile;

/// Something the terminal front-end can draw.
pub trait Screen {
    /// Heading shown at the top of the screen.
    fn title(&self) -> &'static str;

    /// Writes the screen body below the heading.
    fn render_body(&self, out: &mut dyn Write) -> io::Result<()>;

    /// Writes the heading followed by the body.
    fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "== {} ==", self.title())?;
        self.render_body(out)
    }
}
