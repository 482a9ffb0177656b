//! Topic nodes of the content tree.

use crate::DocId;

/// A node in the content tree.
///
/// A topic carries a display name, an optional document, and ordered child topics. Leaf
/// topics usually carry a document; inner topics usually do not, but both are allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    /// Display name (the key in the JSON tree).
    pub name: String,
    /// Explicit URL segment, if the tree defines one.
    pub url_path: Option<String>,
    /// Canonical route segment: `url_path`, or the slug of `name`.
    pub segment: String,
    /// Document shown for this topic.
    pub doc: Option<DocId>,
    /// Child topics in authored order.
    pub children: Vec<Topic>,
}

impl Topic {
    /// Finds the child addressed by a route segment, as [`find_child`] does.
    pub fn child(&self, segment: &str) -> Option<&Self> {
        find_child(&self.children, segment)
    }

    /// Returns true if this topic has child topics.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Returns the number of topics in this subtree, including this one.
    pub fn topic_count(&self) -> usize {
        1 + self.children.iter().map(Self::topic_count).sum::<usize>()
    }
}

/// Finds the topic in `topics` addressed by `segment`.
///
/// Canonical segments take precedence over raw names, so every topic stays reachable by the
/// path its hrefs use even when another sibling is named like that segment.
pub fn find_child<'a>(topics: &'a [Topic], segment: &str) -> Option<&'a Topic> {
    topics
        .iter()
        .find(|t| t.segment == segment)
        .or_else(|| topics.iter().find(|t| t.name == segment))
}
