//! Diary screen. Everything typed here lives only as long as the process.
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use quote_common::QuoteError;

use crate::screen::Screen;

/// Slider value in `0..=10`, step 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 10;

    /// Rejects values outside `MIN..=MAX` instead of clamping them.
    pub fn new(value: i64) -> Result<Self, QuoteError> {
        if value < i64::from(Self::MIN) || value > i64::from(Self::MAX) {
            return Err(QuoteError::InvalidRating {
                value,
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        Ok(Rating(value as u8))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl FromStr for Rating {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| QuoteError::Format(format!("Rating must be a whole number, got '{}'", s.trim())))?;
        Rating::new(value)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

#[derive(Debug, Default)]
pub struct DiaryScreen {
    today: String,
    happiness: Option<Rating>,
    productivity: Option<Rating>,
}

impl DiaryScreen {
    pub fn set_today(&mut self, text: &str) {
        self.today = text.to_string();
    }

    pub fn set_happiness(&mut self, rating: Rating) {
        self.happiness = Some(rating);
    }

    pub fn set_productivity(&mut self, rating: Rating) {
        self.productivity = Some(rating);
    }
}

fn rating_line(out: &mut dyn Write, prompt: &str, rating: Option<Rating>) -> io::Result<()> {
    match rating {
        Some(rating) => writeln!(out, "{}: {}", prompt, rating),
        None => writeln!(out, "{}: -", prompt),
    }
}

impl Screen for DiaryScreen {
    fn title(&self) -> &'static str {
        "My Diary"
    }

    fn render_body(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Today")?;
        if self.today.is_empty() {
            writeln!(out, "  (Your thoughts, feelings, etc.)")?;
        } else {
            writeln!(out, "  {}", self.today)?;
        }
        rating_line(out, "Rate your happiness", self.happiness)?;
        rating_line(out, "Rate your productivity", self.productivity)
    }
}
