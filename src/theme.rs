//! Semantic ANSI color theme for CLI output.
//!
//! Colors are cosmetic only: every message carries its meaning in plain
//! text, and the theme degrades to uncolored output when stdout is not a
//! terminal (piped or redirected).

use crossterm::tty::IsTty;
use std::io::stdout;

// === ANSI Escape Sequences ===

const ANSI_RED: &str = "\x1b[31m";
const ANSI_GREEN: &str = "\x1b[32m";
const ANSI_DIM: &str = "\x1b[2m";
const ANSI_RESET: &str = "\x1b[0m";

/// Semantic color palette applied to CLI messages.
///
/// `error` is red, `hint` is dim, `success` is green. A disabled theme
/// returns the input unchanged, which is also what tests use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    enabled: bool,
}

impl Theme {
    /// Theme with ANSI colors enabled.
    pub const fn ansi() -> Self {
        Self { enabled: true }
    }

    /// Theme that passes text through unchanged.
    pub const fn plain() -> Self {
        Self { enabled: false }
    }

    /// Pick a theme based on whether stdout is an interactive terminal.
    pub fn auto() -> Self {
        if stdout().is_tty() {
            Self::ansi()
        } else {
            Self::plain()
        }
    }

    /// Red error styling.
    pub fn error(&self, text: &str) -> String {
        self.paint(ANSI_RED, text)
    }

    /// Dim hint/diagnostic styling.
    pub fn hint(&self, text: &str) -> String {
        self.paint(ANSI_DIM, text)
    }

    /// Green success styling.
    pub fn success(&self, text: &str) -> String {
        self.paint(ANSI_GREEN, text)
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.enabled {
            format!("{code}{text}{ANSI_RESET}")
        } else {
            text.to_string()
        }
    }
}
