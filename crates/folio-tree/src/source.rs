//! Where note text comes from.

use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
};

use tracing::trace;

use crate::{DocId, DocumentError};

/// Fetches the raw markdown of a note by id.
pub trait DocumentSource {
    /// Returns the raw text of the note.
    fn fetch(&self, id: DocId) -> Result<String, DocumentError>;
}

/// Notes stored as `{dir}/{id}.{extension}`.
#[derive(Debug, Clone)]
pub struct DirSource {
    /// Directory holding the notes.
    dir: PathBuf,
    /// File extension, without the dot.
    extension: String,
}

impl DirSource {
    /// Creates a source over `dir` with the given extension.
    pub fn new(dir: impl Into<PathBuf>, extension: &str) -> Self {
        Self {
            dir: dir.into(),
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    /// Returns the directory notes are read from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the file path for a note.
    pub fn path_for(&self, id: DocId) -> PathBuf {
        self.dir.join(format!("{id}.{}", self.extension))
    }
}

impl DocumentSource for DirSource {
    fn fetch(&self, id: DocId) -> Result<String, DocumentError> {
        let path = self.path_for(id);
        trace!(%id, path = %path.display(), "reading note");
        fs::read_to_string(&path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                DocumentError::Missing { id }
            } else {
                DocumentError::ReadFile { id, path, source }
            }
        })
    }
}

/// Notes held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    /// Note text by id.
    docs: HashMap<DocId, String>,
}

impl MemorySource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a note.
    pub fn insert(&mut self, id: DocId, text: impl Into<String>) {
        self.docs.insert(id, text.into());
    }

    /// Returns the number of notes held.
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    /// Returns true if no notes are held.
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}

impl DocumentSource for MemorySource {
    fn fetch(&self, id: DocId) -> Result<String, DocumentError> {
        self.docs
            .get(&id)
            .cloned()
            .ok_or(DocumentError::Missing { id })
    }
}

impl<S: Into<String>> FromIterator<(DocId, S)> for MemorySource {
    fn from_iter<I: IntoIterator<Item = (DocId, S)>>(iter: I) -> Self {
        Self {
            docs: iter.into_iter().map(|(id, s)| (id, s.into())).collect(),
        }
    }
}
