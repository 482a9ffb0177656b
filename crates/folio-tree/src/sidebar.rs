//! Sidebar expand/collapse state.
//!
//! The sidebar shows the content tree with some topics expanded. Expansion is keyed by
//! canonical path, so the same state renders the same rows for the same tree.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::{ContentTree, DocId, Resolution, Topic, route_href};

/// One visible sidebar row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarEntry {
    /// Depth below the root (0 for top-level topics).
    pub depth: usize,
    /// Topic name.
    pub title: String,
    /// Canonical path, joined with `/`.
    pub path: String,
    /// True if the topic has children.
    pub has_children: bool,
    /// Document of the topic, if any.
    pub doc: Option<DocId>,
    /// True if the topic's children are shown.
    pub expanded: bool,
    /// True if this row is the current route.
    pub active: bool,
    /// True if this row is the current route or one of its ancestors.
    pub in_trail: bool,
}

impl SidebarEntry {
    /// Returns the link for this row under the given route prefix.
    pub fn href(&self, prefix: &str) -> String {
        route_href(prefix, &self.path)
    }
}

/// The set of expanded topics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SidebarState {
    /// Canonical paths of expanded topics.
    expanded: BTreeSet<String>,
}

impl SidebarState {
    /// Creates a state with everything collapsed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the topic at `path` is expanded.
    pub fn is_expanded(&self, path: &str) -> bool {
        self.expanded.contains(path.trim_matches('/'))
    }

    /// Expands the topic at `path`. Returns false if it already was.
    pub fn expand(&mut self, path: &str) -> bool {
        self.expanded.insert(normalize(path))
    }

    /// Collapses the topic at `path`. Returns false if it already was.
    pub fn collapse(&mut self, path: &str) -> bool {
        self.expanded.remove(&normalize(path))
    }

    /// Flips the topic at `path` and returns whether it is now expanded.
    pub fn toggle(&mut self, path: &str) -> bool {
        let path = normalize(path);
        if self.expanded.remove(&path) {
            false
        } else {
            self.expanded.insert(path);
            true
        }
    }

    /// Makes the state agree with the current route.
    ///
    /// Every ancestor of the resolved topic is expanded, and the topic itself when it has
    /// children. Other expanded topics stay as they are.
    pub fn sync_to_route(&mut self, resolution: &Resolution<'_>) {
        let Some((current, ancestors)) = resolution.trail.split_last() else {
            return;
        };
        for crumb in ancestors {
            self.expanded.insert(crumb.path.clone());
        }
        if resolution.topic().is_some_and(Topic::has_children) {
            self.expanded.insert(current.path.clone());
        }
    }

    /// Returns the expanded paths in sorted order.
    pub fn expanded_paths(&self) -> impl Iterator<Item = &str> {
        self.expanded.iter().map(String::as_str)
    }

    /// Flattens the visible part of `tree` into rows, in tree order.
    ///
    /// Children are listed only under expanded topics. `active` is the canonical path of
    /// the current route, if any.
    pub fn entries(&self, tree: &ContentTree, active: Option<&str>) -> Vec<SidebarEntry> {
        let mut rows = Vec::new();
        self.collect(tree.topics(), "", 0, active, &mut rows);
        rows
    }

    /// Appends rows for `topics` and their visible descendants.
    fn collect(
        &self,
        topics: &[Topic],
        parent: &str,
        depth: usize,
        active: Option<&str>,
        rows: &mut Vec<SidebarEntry>,
    ) {
        for topic in topics {
            let path = if parent.is_empty() {
                topic.segment.clone()
            } else {
                format!("{parent}/{}", topic.segment)
            };
            let expanded = topic.has_children() && self.is_expanded(&path);
            let is_active = active == Some(path.as_str());
            let in_trail = active.is_some_and(|a| is_within(a, &path));

            rows.push(SidebarEntry {
                depth,
                title: topic.name.clone(),
                path: path.clone(),
                has_children: topic.has_children(),
                doc: topic.doc,
                expanded,
                active: is_active,
                in_trail,
            });

            if expanded {
                self.collect(&topic.children, &path, depth + 1, active, rows);
            }
        }
    }
}

/// Strips surrounding slashes from a path.
fn normalize(path: &str) -> String {
    path.trim_matches('/').to_string()
}

/// Returns true if `path` equals `ancestor` or lies below it.
fn is_within(path: &str, ancestor: &str) -> bool {
    path.strip_prefix(ancestor)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}
