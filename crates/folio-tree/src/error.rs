//! Error types for content trees and documents.

use std::{io, path::PathBuf};

use thiserror::Error;

use crate::DocId;

/// Errors that can occur when loading a content tree.
#[derive(Debug, Error)]
pub enum TreeError {
    /// Failed to read the tree file.
    #[error("failed to read content tree {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The tree is not valid JSON.
    #[error("content tree is not valid JSON: {source}")]
    ParseJson {
        /// Underlying JSON error.
        #[from]
        source: serde_json::Error,
    },

    /// A node in the tree has an unexpected shape.
    #[error("invalid content tree node at {location}: {reason}")]
    InvalidNode {
        /// Topic names leading to the node, joined with ` › `.
        location: String,
        /// What is wrong with it.
        reason: String,
    },
}

/// Errors that can occur when fetching a document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Failed to read a document file.
    #[error("failed to read document {id} from {path}: {source}")]
    ReadFile {
        /// The document that was requested.
        id: DocId,
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The source holds no document with this id.
    #[error("no document with id {id}")]
    Missing {
        /// The document that was requested.
        id: DocId,
    },
}
