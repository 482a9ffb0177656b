//! The search loop.
//!
//! There is no index: every search walks the documents referenced by the content tree in
//! tree order, fetches each one through a [`DocumentSource`], and counts term occurrences
//! in its body. Fetches happen one at a time.

use folio_tree::{ContentTree, DocEntry, Document, DocumentSource};
use tracing::{debug, warn};

use crate::{
    ProgressReporter, Query, SearchHit, SearchOutcome, SearchParams, SearchStats, TermCount,
    text::{Haystack, snippet},
};

/// Runs queries against one notebook.
pub struct Searcher<'a> {
    /// The content tree, which fixes the set and order of documents.
    tree: &'a ContentTree,
    /// Where document text comes from.
    source: &'a dyn DocumentSource,
    /// Limit and snippet settings.
    params: SearchParams,
}

impl<'a> Searcher<'a> {
    /// Creates a searcher.
    pub fn new(tree: &'a ContentTree, source: &'a dyn DocumentSource, params: SearchParams) -> Self {
        Self {
            tree,
            source,
            params,
        }
    }

    /// Returns the parameters in use.
    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    /// Scans every document and returns the best hits.
    ///
    /// A document that cannot be fetched is logged, reported, counted as failed, and skipped.
    pub fn search<R: ProgressReporter>(&self, query: &Query, reporter: &mut R) -> SearchOutcome {
        let entries = self.tree.documents();
        let total = entries.len();
        debug!(documents = total, terms = query.terms().len(), "starting search");

        let mut stats = SearchStats::default();
        let mut hits = Vec::new();

        for (order, entry) in entries.iter().enumerate() {
            reporter.on_document_start(entry.id, order + 1, total);

            let raw = match self.source.fetch(entry.id) {
                Ok(raw) => raw,
                Err(e) => {
                    warn!(id = %entry.id, path = entry.path(), error = %e, "skipping document");
                    reporter.on_document_error(entry.id, &e.to_string());
                    stats.failed += 1;
                    continue;
                }
            };
            stats.scanned += 1;

            let hit = self.scan(query, entry, order, &raw);
            reporter.on_document_done(entry.id, hit.as_ref().map_or(0, |h| h.occurrences));
            if let Some(hit) = hit {
                hits.push(hit);
            }
        }

        stats.matched = hits.len();
        hits.sort_by(SearchHit::rank);
        hits.truncate(self.params.limit);

        debug!(
            scanned = stats.scanned,
            matched = stats.matched,
            failed = stats.failed,
            "search complete"
        );
        reporter.on_complete(&stats);
        SearchOutcome { hits, stats }
    }

    /// Counts terms in one document. Returns `None` if no term occurs.
    fn scan(&self, query: &Query, entry: &DocEntry, order: usize, raw: &str) -> Option<SearchHit> {
        let doc = Document::parse(entry.id, raw, entry.name());
        let haystack = Haystack::new(&doc.body, query.is_case_sensitive());

        let term_counts: Vec<TermCount> = query
            .terms()
            .iter()
            .map(|t| TermCount {
                term: t.text.clone(),
                count: haystack.count(&t.text),
            })
            .collect();
        let matched_terms = term_counts.iter().filter(|t| t.count > 0).count();
        if matched_terms == 0 {
            return None;
        }
        let occurrences = term_counts.iter().map(|t| t.count).sum();

        // Most frequent term; the earliest in the query wins ties.
        let lead = term_counts
            .iter()
            .rev()
            .max_by_key(|t| t.count)
            .map(|t| t.term.as_str())?;
        let snippet = haystack
            .first_offset(lead)
            .map(|at| snippet(haystack.original(), at, self.params.snippet_width))
            .unwrap_or_default();

        Some(SearchHit {
            id: entry.id,
            title: doc.title,
            path: entry.path().to_string(),
            trail: entry.trail.clone(),
            matched_terms,
            occurrences,
            term_counts,
            snippet,
            order,
        })
    }
}
