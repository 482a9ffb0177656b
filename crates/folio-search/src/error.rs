//! Error types for the folio-search crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when searching or scanning a notebook.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The query has no usable terms.
    #[error("query '{input}' has no search terms")]
    EmptyQuery {
        /// The query as typed.
        input: String,
    },

    /// The document directory does not exist.
    #[error("document directory {path} does not exist")]
    DocsMissing {
        /// The directory that was expected.
        path: PathBuf,
    },

    /// Walking the document directory failed.
    #[error("failed to scan {path}: {source}")]
    Walk {
        /// Directory being scanned.
        path: PathBuf,
        /// Underlying walk error.
        source: walkdir::Error,
    },
}
