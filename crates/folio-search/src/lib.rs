//! Naive full-text search over a folio notebook.
//!
//! Search needs no index. A query is parsed into terms, then every document the content tree
//! references is fetched in tree order and scanned for occurrences:
//!
//! ```text
//! Query::parse ──► Searcher::search ──► fetch each DocId ──► count terms ──► rank ──► limit
//! ```
//!
//! The crate also discovers the note files present on disk so callers can report documents
//! that are referenced but missing, and files that nothing references.

#![warn(missing_docs)]

mod discovery;
mod error;
mod params;
mod query;
mod reporter;
mod result;
mod search;
mod text;

pub use discovery::{ConsistencyReport, DocumentFile, check_consistency, discover_documents};
pub use error::SearchError;
pub use params::SearchParams;
pub use query::{Query, Term};
pub use reporter::{ProgressReporter, SilentReporter};
pub use result::{SearchHit, SearchOutcome, SearchStats, TermCount};
pub use search::Searcher;
pub use text::snippet;
