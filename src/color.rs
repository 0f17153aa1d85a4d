//! ANSI coloring for the text handler.
//!
//! Color policy is an explicit per-logger setting rather than global state.
//! Terminals without detected ANSI support fall back to plain output instead
//! of failing the log call.

use std::borrow::Cow;
use std::env;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::level::Level;

/// ANSI colors used for level tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    White,
    Cyan,
    Yellow,
    Red,
    Reset,
}

impl Color {
    /// The escape sequence for this color.
    pub const fn code(self) -> &'static str {
        match self {
            Self::White => "\x1b[37m",
            Self::Cyan => "\x1b[36m",
            Self::Yellow => "\x1b[33m",
            Self::Red => "\x1b[31m",
            Self::Reset => "\x1b[0m",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// When to emit ANSI escapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color only when the TERM environment variable reports an
    /// ANSI-capable terminal.
    #[default]
    Auto,
    /// Color unconditionally; the caller owns capability checking.
    Always,
    /// Never color (the no-color override).
    Never,
}

impl ColorMode {
    /// Resolve the policy to a concrete on/off decision.
    pub fn enabled(self) -> bool {
        match self {
            Self::Never => false,
            Self::Always => true,
            Self::Auto => env::var("TERM").is_ok_and(|term| term_supports_ansi(&term)),
        }
    }
}

/// Whether a TERM value names a color-capable terminal.
///
/// Case-sensitive substring match, so e.g. "xterm-256color" and
/// "screen.linux-color" qualify while "dumb" does not.
pub fn term_supports_ansi(term: &str) -> bool {
    term.contains("xterm") || term.contains("color")
}

/// Frame `text` with a color escape and a trailing reset.
///
/// Returns the input unchanged when coloring is disabled or the color is
/// `Reset` (a no-op wrap).
pub fn paint(text: &str, color: Color, enabled: bool) -> Cow<'_, str> {
    if !enabled || color == Color::Reset {
        return Cow::Borrowed(text);
    }

    Cow::Owned(format!("{}{}{}", color.code(), text, Color::Reset.code()))
}

/// Color assigned to each level's token in text output.
pub fn level_color(level: Level) -> Color {
    match level {
        Level::Debug => Color::White,
        Level::Info => Color::Cyan,
        Level::Warn => Color::Yellow,
        Level::Error | Level::Fatal => Color::Red,
        Level::Invalid => Color::White,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_supports_ansi() {
        assert!(term_supports_ansi("xterm"));
        assert!(term_supports_ansi("xterm-256color"));
        assert!(term_supports_ansi("screen-color"));
        assert!(!term_supports_ansi("dumb"));
        assert!(!term_supports_ansi("XTERM"));
        assert!(!term_supports_ansi(""));
    }

    #[test]
    fn test_paint_disabled_returns_input() {
        assert_eq!(paint("INF", Color::Cyan, false), "INF");
    }

    #[test]
    fn test_paint_reset_is_noop() {
        assert_eq!(paint("INF", Color::Reset, true), "INF");
    }

    #[test]
    fn test_paint_frames_text() {
        let painted = paint("ERR", Color::Red, true);
        assert_eq!(painted, "\x1b[31mERR\x1b[0m");
    }

    #[test]
    fn test_never_mode_disables() {
        assert!(!ColorMode::Never.enabled());
    }

    #[test]
    fn test_always_mode_enables_without_env() {
        assert!(ColorMode::Always.enabled());
    }

    #[test]
    fn test_level_colors() {
        assert_eq!(level_color(Level::Debug), Color::White);
        assert_eq!(level_color(Level::Info), Color::Cyan);
        assert_eq!(level_color(Level::Warn), Color::Yellow);
        assert_eq!(level_color(Level::Error), Color::Red);
        assert_eq!(level_color(Level::Fatal), Color::Red);
        assert_eq!(level_color(Level::Invalid), Color::White);
    }
}
