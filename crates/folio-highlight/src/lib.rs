//! Syntax highlighting and terminal styling for folio.
//!
//! This crate provides syntax-highlighted output of notes and configuration, named styles
//! for headers, breadcrumbs and search matches, and helpers for emphasizing matched terms.

#![warn(missing_docs)]

mod format;
pub mod theme;

pub use format::{
    breadcrumb, dim, format_body, header, indent_content, match_ranges, subheader, success,
    warning,
};
use syntect::{
    easy::HighlightLines,
    highlighting::Style,
    parsing::SyntaxSet,
    util::{LinesWithEndings, as_24_bit_terminal_escaped},
};
pub use theme::{color_enabled, set_color_enabled};
use two_face::{
    syntax::extra_newlines as extra_syntaxes,
    theme::{EmbeddedLazyThemeSet, EmbeddedThemeName, extra as extra_themes},
};

/// Highlights notes and configuration for the terminal.
pub struct Highlighter {
    /// Language definitions, including TOML and markdown.
    syntax_set: SyntaxSet,
    /// Embedded color themes.
    theme_set: EmbeddedLazyThemeSet,
    /// The theme in use.
    theme: EmbeddedThemeName,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter {
    /// Creates a highlighter with the Dracula theme.
    pub fn new() -> Self {
        Self {
            syntax_set: extra_syntaxes(),
            theme_set: extra_themes(),
            theme: EmbeddedThemeName::Dracula,
        }
    }

    /// Highlights TOML.
    pub fn highlight_toml(&self, content: &str) -> String {
        self.highlight(content, "toml")
    }

    /// Highlights a markdown note.
    pub fn highlight_markdown(&self, content: &str) -> String {
        self.highlight(content, "md")
    }

    /// Highlights `content` using the syntax for an extension or language name.
    ///
    /// Unknown syntaxes fall back to plain text. With colors disabled the content is
    /// returned unchanged.
    pub fn highlight(&self, content: &str, syntax_name: &str) -> String {
        if !color_enabled() {
            return content.to_string();
        }
        let syntax = self
            .syntax_set
            .find_syntax_by_extension(syntax_name)
            .or_else(|| self.syntax_set.find_syntax_by_name(syntax_name))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let palette = self.theme_set.get(self.theme);
        let mut lines = HighlightLines::new(syntax, palette);

        let mut output = String::with_capacity(content.len() * 2);
        for line in LinesWithEndings::from(content) {
            let ranges: Vec<(Style, &str)> = lines
                .highlight_line(line, &self.syntax_set)
                .unwrap_or_else(|_| vec![(Style::default(), line)]);
            output.push_str(&as_24_bit_terminal_escaped(&ranges, false));
        }
        output.push_str(theme::codes::RESET);
        output
    }
}
