use std::{fmt, str::FromStr};

use colored::{Color as AnsiColor, Colorize};
use thiserror::Error;

/// Display color for tags and library names.
///
/// `Default` means "no color": the text is emitted untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl Color {
    pub const PALETTE: [Color; 17] = [
        Color::Default,
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
        Color::BrightBlack,
        Color::BrightRed,
        Color::BrightGreen,
        Color::BrightYellow,
        Color::BrightBlue,
        Color::BrightMagenta,
        Color::BrightCyan,
        Color::BrightWhite,
    ];

    pub const fn ansi(self) -> Option<AnsiColor> {
        match self {
            Color::Default => None,
            Color::Black => Some(AnsiColor::Black),
            Color::Red => Some(AnsiColor::Red),
            Color::Green => Some(AnsiColor::Green),
            Color::Yellow => Some(AnsiColor::Yellow),
            Color::Blue => Some(AnsiColor::Blue),
            Color::Magenta => Some(AnsiColor::Magenta),
            Color::Cyan => Some(AnsiColor::Cyan),
            Color::White => Some(AnsiColor::White),
            Color::BrightBlack => Some(AnsiColor::BrightBlack),
            Color::BrightRed => Some(AnsiColor::BrightRed),
            Color::BrightGreen => Some(AnsiColor::BrightGreen),
            Color::BrightYellow => Some(AnsiColor::BrightYellow),
            Color::BrightBlue => Some(AnsiColor::BrightBlue),
            Color::BrightMagenta => Some(AnsiColor::BrightMagenta),
            Color::BrightCyan => Some(AnsiColor::BrightCyan),
            Color::BrightWhite => Some(AnsiColor::BrightWhite),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::Default => "DEFAULT",
            Color::Black => "BLACK",
            Color::Red => "RED",
            Color::Green => "GREEN",
            Color::Yellow => "YELLOW",
            Color::Blue => "BLUE",
            Color::Magenta => "MAGENTA",
            Color::Cyan => "CYAN",
            Color::White => "WHITE",
            Color::BrightBlack => "BRIGHT_BLACK",
            Color::BrightRed => "BRIGHT_RED",
            Color::BrightGreen => "BRIGHT_GREEN",
            Color::BrightYellow => "BRIGHT_YELLOW",
            Color::BrightBlue => "BRIGHT_BLUE",
            Color::BrightMagenta => "BRIGHT_MAGENTA",
            Color::BrightCyan => "BRIGHT_CYAN",
            Color::BrightWhite => "BRIGHT_WHITE",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown color `{0}`")]
pub struct ParseColorError(pub String);

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase().replace(['-', ' '], "_");
        let wanted = match wanted.as_str() {
            "GRAY" | "GREY" | "DARK_GRAY" => "BRIGHT_BLACK",
            other => other,
        };
        Color::PALETTE
            .into_iter()
            .find(|color| color.name() == wanted)
            .ok_or_else(|| ParseColorError(s.to_string()))
    }
}

/// Wraps `text` in the escape sequence for `color` when `enabled`.
/// `None` (or a disabled painter) yields the raw text.
pub(crate) fn paint(text: &str, color: Option<AnsiColor>, enabled: bool) -> String {
    match color {
        Some(color) if enabled => text.color(color).to_string(),
        _ => text.to_string(),
    }
}

#[test]
fn test_color_parse() {
    assert_eq!("bright_cyan".parse::<Color>(), Ok(Color::BrightCyan));
    assert_eq!("Bright-Red".parse::<Color>(), Ok(Color::BrightRed));
    assert_eq!("gray".parse::<Color>(), Ok(Color::BrightBlack));
    assert_eq!("blue".parse::<Color>(), Ok(Color::Blue));
    assert!("purple".parse::<Color>().is_err());
}

#[test]
fn test_default_color_is_uncolored() {
    assert_eq!(Color::default(), Color::Default);
    assert_eq!(Color::Default.ansi(), None);
    assert_eq!(paint("[Net]", Color::Default.ansi(), true), "[Net]");
    assert_eq!(paint("[Net]", Color::Red.ansi(), false), "[Net]");
}
