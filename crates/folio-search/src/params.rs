//! Search parameters.

use folio_config::{
    DEFAULT_MIN_TERM_LENGTH, DEFAULT_SEARCH_LIMIT, DEFAULT_SNIPPET_WIDTH, SearchSettings,
};

/// Knobs for a single search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    /// Maximum number of hits returned.
    pub limit: usize,
    /// Approximate snippet length in characters.
    pub snippet_width: usize,
    /// Terms shorter than this (in characters) are dropped.
    pub min_term_length: usize,
    /// Match case exactly.
    pub case_sensitive: bool,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            limit: DEFAULT_SEARCH_LIMIT,
            snippet_width: DEFAULT_SNIPPET_WIDTH,
            min_term_length: DEFAULT_MIN_TERM_LENGTH,
            case_sensitive: false,
        }
    }
}

impl From<&SearchSettings> for SearchParams {
    fn from(settings: &SearchSettings) -> Self {
        Self {
            limit: settings.limit,
            snippet_width: settings.snippet_width,
            min_term_length: settings.min_term_length,
            case_sensitive: settings.case_sensitive,
        }
    }
}

impl SearchParams {
    /// Returns a copy with a different limit.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Returns a copy with case sensitivity set.
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }
}
