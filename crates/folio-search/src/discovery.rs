//! Document file discovery.
//!
//! Walks a notebook's document directory to find the note files that are actually on disk,
//! and compares them with the documents the content tree references. Hidden entries and
//! symlinks are skipped, as are paths matching the notebook's exclude patterns.

use std::{
    collections::{BTreeMap, HashSet},
    ffi::OsStr,
    path::{Path, PathBuf},
};

use folio_config::ExcludePatterns;
use folio_tree::{ContentTree, DocEntry, DocId};
use tracing::debug;
use walkdir::WalkDir;

use crate::SearchError;

/// A note file found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentFile {
    /// Absolute path to the file.
    pub abs_path: PathBuf,
    /// Path relative to the document directory.
    pub rel_path: PathBuf,
    /// Document id, when the file sits directly in the directory with a numeric stem.
    pub id: Option<DocId>,
}

/// Differences between the content tree and the files on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsistencyReport {
    /// Documents the tree references that have no file.
    pub missing: Vec<DocEntry>,
    /// Files no topic references, relative to the document directory.
    pub orphans: Vec<PathBuf>,
}

impl ConsistencyReport {
    /// Returns true if tree and directory agree.
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.orphans.is_empty()
    }
}

/// Finds every file with `extension` under `dir`.
///
/// Only files directly inside `dir` whose stem is a number get an id, because those are the
/// only ones a notebook can load. Results are sorted by relative path.
pub fn discover_documents(
    dir: &Path,
    extension: &str,
    exclude: &ExcludePatterns,
) -> Result<Vec<DocumentFile>, SearchError> {
    if !dir.is_dir() {
        return Err(SearchError::DocsMissing {
            path: dir.to_path_buf(),
        });
    }
    let extension = extension.trim_start_matches('.');
    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e.file_name()))
    {
        let entry = entry.map_err(|source| SearchError::Walk {
            path: dir.to_path_buf(),
            source,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let abs_path = entry.path().to_path_buf();
        if abs_path.extension().and_then(OsStr::to_str) != Some(extension) {
            continue;
        }
        let Ok(rel_path) = abs_path.strip_prefix(dir).map(Path::to_path_buf) else {
            continue;
        };
        if exclude.is_excluded(&rel_path) {
            debug!(path = %rel_path.display(), "excluded");
            continue;
        }

        let id = if entry.depth() == 1 {
            numeric_stem(&abs_path)
        } else {
            None
        };
        files.push(DocumentFile {
            abs_path,
            rel_path,
            id,
        });
    }

    Ok(files)
}

/// Compares the tree's documents against discovered files.
///
/// Missing documents are listed by id; orphans keep discovery order.
pub fn check_consistency(tree: &ContentTree, files: &[DocumentFile]) -> ConsistencyReport {
    let on_disk: HashSet<DocId> = files.iter().filter_map(|f| f.id).collect();
    let referenced: BTreeMap<DocId, DocEntry> =
        tree.documents().into_iter().map(|d| (d.id, d)).collect();

    let missing = referenced
        .values()
        .filter(|d| !on_disk.contains(&d.id))
        .cloned()
        .collect();

    let orphans = files
        .iter()
        .filter(|f| f.id.is_none_or(|id| !referenced.contains_key(&id)))
        .map(|f| f.rel_path.clone())
        .collect();

    ConsistencyReport { missing, orphans }
}

/// Checks if a file name is hidden (starts with '.').
fn is_hidden(name: &OsStr) -> bool {
    name.to_str().is_some_and(|s| s.starts_with('.'))
}

/// Parses the file stem as a document id.
fn numeric_stem(path: &Path) -> Option<DocId> {
    let stem = path.file_stem()?.to_str()?;
    if stem.is_empty() || !stem.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    stem.parse().ok()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    /// Creates the given files (with parent directories) under a fresh temp dir.
    fn layout(files: &[&str]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for file in files {
            let path = dir.path().join(file);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, "# note").unwrap();
        }
        dir
    }

    /// Patterns that exclude nothing.
    fn no_excludes() -> ExcludePatterns {
        ExcludePatterns::compile(&[]).unwrap()
    }

    #[test]
    fn finds_numeric_files() {
        let dir = layout(&["2.md", "10.md", "notes.txt", "README.md"]);
        let files = discover_documents(dir.path(), "md", &no_excludes()).unwrap();
        let found: Vec<_> = files
            .iter()
            .map(|f| (f.rel_path.to_string_lossy().into_owned(), f.id))
            .collect();
        assert_eq!(
            found,
            vec![
                ("10.md".to_string(), Some(DocId(10))),
                ("2.md".to_string(), Some(DocId(2))),
                ("README.md".to_string(), None),
            ]
        );
    }

    #[test]
    fn nested_files_have_no_id() {
        let dir = layout(&["old/3.md"]);
        let files = discover_documents(dir.path(), ".md", &no_excludes()).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].id, None);
    }

    #[test]
    fn skips_hidden_and_excluded() {
        let dir = layout(&[".trash/1.md", ".5.md", "drafts/6.md", "7.md"]);
        let exclude = ExcludePatterns::compile(&["drafts/**".to_string()]).unwrap();
        let files = discover_documents(dir.path(), "md", &exclude).unwrap();
        let ids: Vec<_> = files.iter().filter_map(|f| f.id).collect();
        assert_eq!(ids, vec![DocId(7)]);
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn missing_directory() {
        let dir = TempDir::new().unwrap();
        let err = discover_documents(&dir.path().join("nope"), "md", &no_excludes()).unwrap_err();
        assert!(matches!(err, SearchError::DocsMissing { .. }));
    }

    #[test]
    fn consistency_report() {
        let dir = layout(&["1.md", "3.md", "old/2.md"]);
        let tree = ContentTree::from_json_str(
            r#"{ "A": { "___md___": 1 }, "B": { "___md___": 2 } }"#,
        )
        .unwrap();
        let files = discover_documents(dir.path(), "md", &no_excludes()).unwrap();
        let report = check_consistency(&tree, &files);

        let missing: Vec<_> = report.missing.iter().map(|d| d.id).collect();
        assert_eq!(missing, vec![DocId(2)]);
        assert_eq!(report.missing[0].path(), "b");
        assert_eq!(
            report.orphans,
            vec![PathBuf::from("3.md"), PathBuf::from("old/2.md")]
        );
        assert!(!report.is_clean());
    }

    #[test]
    fn clean_report() {
        let dir = layout(&["1.md"]);
        let tree = ContentTree::from_json_str(r#"{ "A": { "___md___": 1 } }"#).unwrap();
        let files = discover_documents(dir.path(), "md", &no_excludes()).unwrap();
        assert!(check_consistency(&tree, &files).is_clean());
    }
}
