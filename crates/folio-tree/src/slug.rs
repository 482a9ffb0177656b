//! GitHub-compatible slug generation.
//!
//! Slugs serve two purposes: the canonical route segment of a topic that has no explicit
//! URL path, and anchors for headings in a document outline. The algorithm follows GitHub's
//! conventions:
//! - Lowercase the text
//! - Remove punctuation except hyphens and spaces
//! - Replace spaces with hyphens
//! - Collapse consecutive hyphens
//! - Trim leading/trailing hyphens
//! - Append `-N` suffix for duplicate heading slugs

use std::collections::HashMap;

/// Returns the canonical route segment for a topic name.
///
/// Names that slugify to nothing (all punctuation, non-ASCII) fall back to `topic`.
pub fn segment_slug(name: &str) -> String {
    base_slug(name).unwrap_or_else(|| "topic".to_string())
}

/// Generates unique heading anchors.
///
/// Tracks previously generated slugs to ensure uniqueness by appending
/// numeric suffixes to duplicates.
#[derive(Debug, Default)]
pub struct Slugifier {
    /// Count of how many times each base slug has been used.
    counts: HashMap<String, usize>,
}

impl Slugifier {
    /// Creates a new slugifier with no prior slugs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates a GitHub-compatible slug from heading text, unique within this slugifier.
    pub fn slugify(&mut self, heading: &str) -> String {
        let base = base_slug(heading).unwrap_or_else(|| "heading".to_string());
        self.deduplicate(base)
    }

    /// Ensures the slug is unique, appending `-N` suffix if needed.
    fn deduplicate(&mut self, base: String) -> String {
        let count = self.counts.entry(base.clone()).or_insert(0);
        *count += 1;

        if *count == 1 {
            base
        } else {
            format!("{}-{}", base, *count - 1)
        }
    }
}

/// Creates the base slug, or `None` if nothing survives.
fn base_slug(text: &str) -> Option<String> {
    let mut result = String::with_capacity(text.len());
    let mut prev_hyphen = false;

    for c in text.chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            result.push(c.to_ascii_lowercase());
            prev_hyphen = false;
        } else if (c == ' ' || c == '-') && !prev_hyphen {
            result.push('-');
            prev_hyphen = true;
        }
    }

    let trimmed = result.trim_matches('-');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
