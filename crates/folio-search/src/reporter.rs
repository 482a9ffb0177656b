//! Progress callbacks for a running search.

use folio_tree::DocId;

use crate::SearchStats;

/// Receives progress as a search scans documents.
pub trait ProgressReporter {
    /// Called before a document is fetched.
    fn on_document_start(&mut self, id: DocId, current: usize, total: usize);

    /// Called after a document was scanned; `occurrences` is zero when it did not match.
    fn on_document_done(&mut self, id: DocId, occurrences: usize);

    /// Called when a document could not be fetched. The search continues.
    fn on_document_error(&mut self, id: DocId, error: &str);

    /// Called once after the last document.
    fn on_complete(&mut self, stats: &SearchStats);
}

/// A reporter that ignores every event.
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {
    fn on_document_start(&mut self, _id: DocId, _current: usize, _total: usize) {}
    fn on_document_done(&mut self, _id: DocId, _occurrences: usize) {}
    fn on_document_error(&mut self, _id: DocId, _error: &str) {}
    fn on_complete(&mut self, _stats: &SearchStats) {}
}
