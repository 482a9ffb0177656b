//! Occurrence counting and snippets.

use std::borrow::Cow;

/// Lowercases `text` one character at a time.
///
/// Queries and documents both fold through here so that context-sensitive rules such as the
/// Greek final sigma never make the two sides disagree.
pub fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Document text prepared for matching.
///
/// Case-insensitive matching runs against a lowercased copy; `origin` maps each byte of that
/// copy back to the start of the character it came from, so matches can be located in the
/// original text.
#[derive(Debug)]
pub struct Haystack<'a> {
    /// The original text.
    original: &'a str,
    /// Text that terms are matched against.
    folded: Cow<'a, str>,
    /// Byte offset in `original` for each byte of `folded`, when they differ.
    origin: Option<Vec<usize>>,
}

impl<'a> Haystack<'a> {
    /// Prepares `text` for matching.
    pub fn new(text: &'a str, case_sensitive: bool) -> Self {
        if case_sensitive {
            return Self {
                original: text,
                folded: Cow::Borrowed(text),
                origin: None,
            };
        }

        let mut folded = String::with_capacity(text.len());
        let mut origin = Vec::with_capacity(text.len());
        for (offset, ch) in text.char_indices() {
            folded.extend(ch.to_lowercase());
            origin.resize(folded.len(), offset);
        }
        Self {
            original: text,
            folded: Cow::Owned(folded),
            origin: Some(origin),
        }
    }

    /// Returns the original text.
    pub fn original(&self) -> &'a str {
        self.original
    }

    /// Counts non-overlapping occurrences of `needle`.
    pub fn count(&self, needle: &str) -> usize {
        if needle.is_empty() {
            return 0;
        }
        self.folded.match_indices(needle).count()
    }

    /// Returns the byte offset in the original text of the first occurrence of `needle`.
    pub fn first_offset(&self, needle: &str) -> Option<usize> {
        if needle.is_empty() {
            return None;
        }
        let at = self.folded.find(needle)?;
        Some(match &self.origin {
            Some(origin) => origin.get(at).copied().unwrap_or(self.original.len()),
            None => at,
        })
    }
}

/// Cuts about `width` characters of `text` around byte offset `at`.
///
/// Whitespace inside the window is collapsed, and `…` marks each side that was cut.
pub fn snippet(text: &str, at: usize, width: usize) -> String {
    if width == 0 || text.is_empty() {
        return String::new();
    }
    let mut at = at.min(text.len());
    while !text.is_char_boundary(at) {
        at -= 1;
    }

    let start = text[..at]
        .char_indices()
        .rev()
        .take(width / 2)
        .last()
        .map_or(at, |(i, _)| i);
    let taken = text[start..at].chars().count();
    let end = text[at..]
        .char_indices()
        .nth(width - taken)
        .map_or(text.len(), |(i, _)| at + i);

    let body = text[start..end].split_whitespace().collect::<Vec<_>>().join(" ");
    let mut out = String::with_capacity(body.len() + 6);
    if start > 0 {
        out.push('…');
    }
    out.push_str(&body);
    if end < text.len() {
        out.push('…');
    }
    out
}
