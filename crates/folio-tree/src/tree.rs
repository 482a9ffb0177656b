//! The content tree and its traversal.
//!
//! `ContentTree` owns the top-level topics. It is loaded once and never mutated, so every
//! lookup against the same tree gives the same answer.

use std::{
    collections::{HashMap, HashSet},
    fmt, fs,
    path::Path,
};

use serde_json::Value;

use crate::{
    Crumb, DocId, Resolution, ResolveError, Topic, TreeError,
    load::topics_from_value,
    resolve::{parse_route, resolve as resolve_segments},
};

/// A hierarchical notes tree loaded from JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentTree {
    /// Top-level topics in authored order.
    topics: Vec<Topic>,
}

/// A topic visited during pre-order traversal.
#[derive(Debug, Clone)]
pub struct Visit<'a> {
    /// The visited topic.
    pub topic: &'a Topic,
    /// Canonical segments from the root to this topic, inclusive.
    pub path: Vec<String>,
    /// Topics from the root to this topic, inclusive.
    pub lineage: Vec<&'a Topic>,
}

impl Visit<'_> {
    /// Depth below the root (0 for top-level topics).
    pub fn depth(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Canonical path joined with `/`.
    pub fn joined(&self) -> String {
        self.path.join("/")
    }

    /// Breadcrumb trail leading to this topic.
    pub fn crumbs(&self) -> Vec<Crumb> {
        let mut crumbs: Vec<Crumb> = Vec::with_capacity(self.lineage.len());
        for topic in &self.lineage {
            let path = match crumbs.last() {
                Some(parent) => format!("{}/{}", parent.path, topic.segment),
                None => topic.segment.clone(),
            };
            crumbs.push(Crumb {
                title: topic.name.clone(),
                segment: topic.segment.clone(),
                path,
                doc: topic.doc,
            });
        }
        crumbs
    }
}

/// A document referenced by the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocEntry {
    /// Document id.
    pub id: DocId,
    /// Trail to the topic that references it.
    pub trail: Vec<Crumb>,
}

impl DocEntry {
    /// Name of the topic that references the document.
    pub fn name(&self) -> &str {
        self.trail.last().map_or("", |c| c.title.as_str())
    }

    /// Canonical path of that topic, joined with `/`.
    pub fn path(&self) -> &str {
        self.trail.last().map_or("", |c| c.path.as_str())
    }
}

/// A structural problem in the tree that does not prevent loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeWarning {
    /// The same document id appears on more than one topic.
    DuplicateDocId {
        /// The repeated id.
        id: DocId,
        /// Path of the first topic carrying it.
        first: String,
        /// Path of a later topic carrying it.
        again: String,
    },
    /// Two sibling topics share a canonical segment; only the first is reachable by it.
    AmbiguousSegment {
        /// Path of the parent (empty for the root).
        parent: String,
        /// The shared segment.
        segment: String,
    },
    /// A topic has neither a document nor children.
    EmptyTopic {
        /// Path of the topic.
        path: String,
    },
}

impl fmt::Display for TreeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateDocId { id, first, again } => {
                write!(f, "document {id} is referenced by both '{first}' and '{again}'")
            }
            Self::AmbiguousSegment { parent, segment } if parent.is_empty() => {
                write!(f, "several top-level topics share the segment '{segment}'")
            }
            Self::AmbiguousSegment { parent, segment } => {
                write!(f, "several topics under '{parent}' share the segment '{segment}'")
            }
            Self::EmptyTopic { path } => {
                write!(f, "topic '{path}' has neither a document nor children")
            }
        }
    }
}

impl ContentTree {
    /// Creates a tree from already-built topics.
    pub fn new(topics: Vec<Topic>) -> Self {
        Self { topics }
    }

    /// Parses a tree from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, TreeError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_json_value(&value)
    }

    /// Builds a tree from a parsed JSON value.
    pub fn from_json_value(value: &Value) -> Result<Self, TreeError> {
        topics_from_value(value).map(Self::new)
    }

    /// Reads and parses a tree file.
    pub fn from_file(path: &Path) -> Result<Self, TreeError> {
        let contents = fs::read_to_string(path).map_err(|source| TreeError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    /// Returns the top-level topics.
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    /// Returns true if the tree has no topics.
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// Returns the total number of topics.
    pub fn topic_count(&self) -> usize {
        self.topics.iter().map(Topic::topic_count).sum()
    }

    /// Iterates all topics depth-first in authored order.
    pub fn iter_preorder(&self) -> Preorder<'_> {
        Preorder::new(&self.topics)
    }

    /// Returns every referenced document in tree order, each id once.
    ///
    /// When an id is referenced more than once, the first topic wins.
    pub fn documents(&self) -> Vec<DocEntry> {
        let mut seen = HashSet::new();
        self.iter_preorder()
            .filter_map(|visit| {
                let id = visit.topic.doc?;
                seen.insert(id).then(|| DocEntry {
                    id,
                    trail: visit.crumbs(),
                })
            })
            .collect()
    }

    /// Resolves route segments to a topic, walking from the root.
    ///
    /// On success the trail holds exactly one crumb per segment. Any segment that addresses
    /// no child fails the whole route.
    pub fn resolve<S: AsRef<str>>(&self, segments: &[S]) -> Result<Resolution<'_>, ResolveError> {
        resolve_segments(&self.topics, segments)
    }

    /// Parses a route string (see [`parse_route`]) and resolves it.
    pub fn resolve_route(&self, route: &str, prefix: &str) -> Result<Resolution<'_>, ResolveError> {
        self.resolve(parse_route(route, prefix).as_slice())
    }

    /// Returns the canonical path of the first topic carrying `id`.
    pub fn locate(&self, id: DocId) -> Option<Vec<String>> {
        self.iter_preorder()
            .find(|visit| visit.topic.doc == Some(id))
            .map(|visit| visit.path)
    }

    /// Checks the tree for structural problems.
    pub fn validate(&self) -> Vec<TreeWarning> {
        let mut warnings = Vec::new();
        warnings.extend(ambiguous_segments(&self.topics, ""));

        let mut first_seen: HashMap<DocId, String> = HashMap::new();
        for visit in self.iter_preorder() {
            let topic = visit.topic;
            let path = visit.joined();

            if topic.has_children() {
                warnings.extend(ambiguous_segments(&topic.children, &path));
            } else if topic.doc.is_none() {
                warnings.push(TreeWarning::EmptyTopic { path: path.clone() });
            }

            if let Some(id) = topic.doc {
                match first_seen.get(&id) {
                    Some(first) => warnings.push(TreeWarning::DuplicateDocId {
                        id,
                        first: first.clone(),
                        again: path,
                    }),
                    None => {
                        first_seen.insert(id, path);
                    }
                }
            }
        }

        warnings
    }
}

/// Reports segments shared by more than one sibling, once per segment.
fn ambiguous_segments(siblings: &[Topic], parent: &str) -> Vec<TreeWarning> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for topic in siblings {
        match counts.iter_mut().find(|(seg, _)| *seg == topic.segment.as_str()) {
            Some((_, n)) => *n += 1,
            None => counts.push((topic.segment.as_str(), 1)),
        }
    }
    counts
        .into_iter()
        .filter(|(_, n)| *n > 1)
        .map(|(segment, _)| TreeWarning::AmbiguousSegment {
            parent: parent.to_string(),
            segment: segment.to_string(),
        })
        .collect()
}

/// Depth-first iterator over topics.
pub struct Preorder<'a> {
    /// Pending topics with their ancestors, next on top.
    stack: Vec<(&'a Topic, Vec<&'a Topic>)>,
}

impl<'a> Preorder<'a> {
    /// Starts a traversal over top-level `topics`.
    pub fn new(topics: &'a [Topic]) -> Self {
        let stack = topics.iter().rev().map(|t| (t, Vec::new())).collect();
        Self { stack }
    }
}

impl<'a> Iterator for Preorder<'a> {
    type Item = Visit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (topic, mut lineage) = self.stack.pop()?;
        lineage.push(topic);
        for child in topic.children.iter().rev() {
            self.stack.push((child, lineage.clone()));
        }
        let path = lineage.iter().map(|t| t.segment.clone()).collect();
        Some(Visit {
            topic,
            path,
            lineage,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Two-level sample tree.
    const SAMPLE: &str = r#"{
        "Algorithms": {
            "___urlPath___": "algo",
            "Sorting": { "___md___": 12 },
            "Graphs": {
                "BFS": { "___md___": 13 },
                "DFS": { "___md___": 14 }
            }
        },
        "Systems": {
            "Memory": { "___md___": 20 }
        }
    }"#;

    /// Parses [`SAMPLE`].
    fn sample() -> ContentTree {
        ContentTree::from_json_str(SAMPLE).unwrap()
    }

    #[test]
    fn test_preorder_paths() {
        let tree = sample();
        let paths: Vec<String> = tree.iter_preorder().map(|v| v.joined()).collect();
        assert_eq!(
            paths,
            vec![
                "algo",
                "algo/sorting",
                "algo/graphs",
                "algo/graphs/bfs",
                "algo/graphs/dfs",
                "systems",
                "systems/memory",
            ]
        );
        assert_eq!(tree.topic_count(), 7);
    }

    #[test]
    fn test_preorder_depth() {
        let tree = sample();
        let dfs = tree
            .iter_preorder()
            .find(|v| v.topic.name == "DFS")
            .unwrap();
        assert_eq!(dfs.depth(), 2);
    }

    #[test]
    fn test_documents_in_tree_order() {
        let tree = sample();
        let ids: Vec<u64> = tree.documents().iter().map(|d| d.id.get()).collect();
        assert_eq!(ids, vec![12, 13, 14, 20]);
    }

    #[test]
    fn test_document_trails_follow_lineage() {
        let tree = ContentTree::from_json_str(
            r#"{ "Top": { "C++": { "___md___": 1 }, "C#": { "___md___": 2 } } }"#,
        )
        .unwrap();
        let docs = tree.documents();
        assert_eq!(docs[1].name(), "C#");
        assert_eq!(docs[1].path(), "top/c");
        let titles: Vec<_> = docs[1].trail.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Top", "C#"]);
    }

    #[test]
    fn test_locate() {
        let tree = sample();
        assert_eq!(
            tree.locate(DocId(14)),
            Some(vec!["algo".into(), "graphs".into(), "dfs".into()])
        );
        assert_eq!(tree.locate(DocId(99)), None);
    }

    #[test]
    fn test_every_located_document_resolves_back() {
        let tree = ContentTree::from_json_str(
            r#"{
                "foo": { "___md___": 1, "___urlPath___": "bar" },
                "Baz": { "___md___": 2, "___urlPath___": "foo" },
                "Nested": { "bar": { "___md___": 3 }, "Qux": { "___md___": 4, "___urlPath___": "Bar" } }
            }"#,
        )
        .unwrap();
        for entry in tree.documents() {
            let path = tree.locate(entry.id).unwrap();
            let resolved = tree.resolve(path.as_slice()).unwrap();
            assert_eq!(resolved.doc_id(), Some(entry.id), "path {path:?}");
        }
    }

    #[test]
    fn test_valid_tree_has_no_warnings() {
        assert!(sample().validate().is_empty());
    }

    #[test]
    fn test_duplicate_ids_are_listed_once() {
        let tree = ContentTree::from_json_str(
            r#"{ "A": { "___md___": 1 }, "B": { "C": { "___md___": 1 } } }"#,
        )
        .unwrap();
        assert_eq!(tree.documents().len(), 1);
        assert_eq!(
            tree.validate(),
            vec![TreeWarning::DuplicateDocId {
                id: DocId(1),
                first: "a".into(),
                again: "b/c".into(),
            }]
        );
    }

    #[test]
    fn test_ambiguous_and_empty_topics() {
        let tree = ContentTree::from_json_str(
            r#"{ "Top": { "C++": { "___md___": 1 }, "C#": { "___md___": 2 }, "Later": {} } }"#,
        )
        .unwrap();
        let warnings = tree.validate();
        assert!(warnings.contains(&TreeWarning::AmbiguousSegment {
            parent: "top".into(),
            segment: "c".into(),
        }));
        assert!(warnings.contains(&TreeWarning::EmptyTopic {
            path: "top/later".into(),
        }));
    }

    #[test]
    fn test_from_file_missing() {
        let err = ContentTree::from_file(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, TreeError::ReadFile { .. }));
    }

    #[test]
    fn test_from_json_syntax_error() {
        let err = ContentTree::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, TreeError::ParseJson { .. }));
    }
}
