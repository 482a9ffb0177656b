//! Search result types.

use std::cmp::{Ordering, Reverse};

use folio_tree::{Crumb, DocId};
use serde::Serialize;

/// How often one query term occurs in a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermCount {
    /// The term as matched.
    pub term: String,
    /// Non-overlapping occurrences.
    pub count: usize,
}

/// A document that matched at least one term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    /// Document id.
    pub id: DocId,
    /// Document title.
    pub title: String,
    /// Canonical path of the topic carrying the document.
    pub path: String,
    /// Breadcrumb trail to that topic.
    pub trail: Vec<Crumb>,
    /// Number of distinct query terms found.
    pub matched_terms: usize,
    /// Total occurrences across all terms.
    pub occurrences: usize,
    /// Per-term counts, in query order.
    pub term_counts: Vec<TermCount>,
    /// Text around the first occurrence of the most frequent term.
    pub snippet: String,
    /// Position of the document in tree order.
    #[serde(skip)]
    pub order: usize,
}

impl SearchHit {
    /// Orders hits best first: more distinct terms, then more occurrences, then tree order.
    pub fn rank(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }

    /// Key that sorts ascending into rank order.
    fn sort_key(&self) -> (Reverse<usize>, Reverse<usize>, usize) {
        (
            Reverse(self.matched_terms),
            Reverse(self.occurrences),
            self.order,
        )
    }
}

/// Counters for one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Documents fetched and scanned.
    pub scanned: usize,
    /// Documents that matched, before the limit.
    pub matched: usize,
    /// Documents that could not be fetched.
    pub failed: usize,
}

/// Hits and counters from one search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
    /// Ranked hits, at most the limit.
    pub hits: Vec<SearchHit>,
    /// Counters.
    pub stats: SearchStats,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a hit with the given ranking fields.
    fn hit(order: usize, matched_terms: usize, occurrences: usize) -> SearchHit {
        SearchHit {
            id: DocId(order as u64),
            title: String::new(),
            path: String::new(),
            trail: vec![],
            matched_terms,
            occurrences,
            term_counts: vec![],
            snippet: String::new(),
            order,
        }
    }

    #[test]
    fn ranks_by_terms_then_occurrences_then_order() {
        let mut hits = vec![hit(0, 1, 9), hit(1, 2, 1), hit(2, 2, 5), hit(3, 1, 9)];
        hits.sort_by(SearchHit::rank);
        let order: Vec<_> = hits.iter().map(|h| h.order).collect();
        assert_eq!(order, vec![2, 1, 0, 3]);
    }

    #[test]
    fn order_is_not_serialized() {
        let json = serde_json::to_value(hit(4, 1, 1)).unwrap();
        assert!(json.get("order").is_none());
        assert_eq!(json["id"], 4);
    }
}
