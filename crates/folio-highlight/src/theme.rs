//! Named styles for terminal output.
//!
//! Every style renders as an ANSI prefix and a reset suffix. Colors can be switched off
//! process-wide with [`set_color_enabled`]; styles then render as plain text.

use std::sync::atomic::{AtomicBool, Ordering};

/// Whether styles emit escape codes.
static COLOR: AtomicBool = AtomicBool::new(true);

/// Turns styled output on or off for the whole process.
pub fn set_color_enabled(enabled: bool) {
    COLOR.store(enabled, Ordering::Relaxed);
}

/// Returns true if styles emit escape codes.
pub fn color_enabled() -> bool {
    COLOR.load(Ordering::Relaxed)
}

/// ANSI codes used by the styles.
pub mod codes {
    /// Bold text.
    pub const BOLD: &str = "\x1b[1m";
    /// Cyan text.
    pub const CYAN: &str = "\x1b[36m";
    /// Green text.
    pub const GREEN: &str = "\x1b[32m";
    /// Yellow text.
    pub const YELLOW: &str = "\x1b[33m";
    /// Blue text.
    pub const BLUE: &str = "\x1b[34m";
    /// Dim text.
    pub const DIM: &str = "\x1b[2m";
    /// Reverse video.
    pub const REVERSE: &str = "\x1b[7m";
    /// Reset all formatting.
    pub const RESET: &str = "\x1b[0m";
}

/// A named combination of ANSI codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    /// Codes emitted before the text.
    codes: &'static [&'static str],
}

impl Style {
    /// Creates a style from ANSI codes.
    pub const fn new(codes: &'static [&'static str]) -> Self {
        Self { codes }
    }

    /// Returns the escape sequence that starts this style.
    pub fn prefix(&self) -> String {
        if color_enabled() {
            self.codes.concat()
        } else {
            String::new()
        }
    }

    /// Returns the escape sequence that ends this style.
    pub fn suffix(&self) -> &'static str {
        if color_enabled() { codes::RESET } else { "" }
    }

    /// Wraps `text` in this style.
    pub fn paint(&self, text: &str) -> String {
        format!("{}{text}{}", self.prefix(), self.suffix())
    }
}

/// Section headers.
pub const HEADER: Style = Style::new(&[codes::BOLD, codes::CYAN]);
/// Secondary headers.
pub const SUBHEADER: Style = Style::new(&[codes::BOLD]);
/// Breadcrumb trails.
pub const BREADCRUMB: Style = Style::new(&[codes::BLUE]);
/// Search term occurrences.
pub const MATCH: Style = Style::new(&[codes::BOLD, codes::YELLOW]);
/// The current route in a sidebar.
pub const ACTIVE: Style = Style::new(&[codes::BOLD, codes::REVERSE]);
/// Less important text.
pub const DIM: Style = Style::new(&[codes::DIM]);
/// Success messages.
pub const SUCCESS: Style = Style::new(&[codes::GREEN]);
/// Warnings.
pub const WARNING: Style = Style::new(&[codes::YELLOW]);
