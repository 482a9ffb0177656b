//! Query parsing.
//!
//! A query is a list of whitespace-separated words and double-quoted phrases:
//!
//! ```text
//! heap "priority queue" dijkstra
//! ```
//!
//! A quote that is never closed runs to the end of the input.

use std::mem;

use crate::{SearchError, SearchParams, text::fold_case};

/// One thing to count in each document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    /// Text to look for, already case-folded unless the query is case-sensitive.
    pub text: String,
    /// True if the term came from a quoted phrase.
    pub phrase: bool,
}

/// A parsed search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// Distinct terms in the order they were typed.
    terms: Vec<Term>,
    /// Whether terms are matched with exact case.
    case_sensitive: bool,
}

impl Query {
    /// Parses query text.
    ///
    /// Words shorter than `min_term_length` are dropped, phrases are kept regardless, and
    /// repeated terms are kept once.
    pub fn parse(input: &str, params: &SearchParams) -> Result<Self, SearchError> {
        let mut terms: Vec<Term> = Vec::new();

        for (raw, phrase) in tokenize(input) {
            let text = normalize(&raw, params.case_sensitive);
            if text.is_empty() || (!phrase && text.chars().count() < params.min_term_length) {
                continue;
            }
            if terms.iter().any(|t| t.text == text) {
                continue;
            }
            terms.push(Term { text, phrase });
        }

        if terms.is_empty() {
            return Err(SearchError::EmptyQuery {
                input: input.to_string(),
            });
        }
        Ok(Self {
            terms,
            case_sensitive: params.case_sensitive,
        })
    }

    /// Returns the terms to count.
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Returns true if matching is case-sensitive.
    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }
}

/// Splits input into `(text, is_phrase)` pieces.
fn tokenize(input: &str) -> Vec<(String, bool)> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_phrase = false;

    for ch in input.chars() {
        match ch {
            '"' => {
                if !current.is_empty() {
                    tokens.push((mem::take(&mut current), in_phrase));
                }
                in_phrase = !in_phrase;
            }
            c if c.is_whitespace() && !in_phrase => {
                if !current.is_empty() {
                    tokens.push((mem::take(&mut current), false));
                }
            }
            c => current.push(c),
        }
    }
    if !current.is_empty() {
        tokens.push((current, in_phrase));
    }
    tokens
}

/// Collapses inner whitespace and folds case.
fn normalize(raw: &str, case_sensitive: bool) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if case_sensitive {
        collapsed
    } else {
        fold_case(&collapsed)
    }
}
