//! Breadcrumb trails.

use serde::Serialize;

use crate::DocId;

/// One step of a breadcrumb trail.
///
/// A resolved route produces one crumb per consumed segment, root first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Crumb {
    /// Topic name shown to the reader.
    pub title: String,
    /// Canonical segment of the topic.
    pub segment: String,
    /// Canonical path from the root to this topic, joined with `/`.
    pub path: String,
    /// Document of the topic, if any.
    pub doc: Option<DocId>,
}

impl Crumb {
    /// Returns the link to this crumb under the given route prefix.
    pub fn href(&self, prefix: &str) -> String {
        route_href(prefix, &self.path)
    }
}

/// Builds an absolute route (`/prefix/a/b`) from a prefix and a canonical path.
pub fn route_href(prefix: &str, path: &str) -> String {
    let mut href = String::from("/");
    let prefix = prefix.trim_matches('/');
    href.push_str(prefix);
    if !path.is_empty() {
        if !prefix.is_empty() {
            href.push('/');
        }
        href.push_str(path);
    }
    href
}

/// Joins crumb titles for display.
pub fn format_trail(trail: &[Crumb], separator: &str) -> String {
    trail
        .iter()
        .map(|c| c.title.as_str())
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Crumb without a document.
    fn crumb(title: &str, path: &str) -> Crumb {
        Crumb {
            title: title.into(),
            segment: path.rsplit('/').next().unwrap_or_default().into(),
            path: path.into(),
            doc: None,
        }
    }

    #[test]
    fn href_with_prefix() {
        assert_eq!(crumb("B", "a/b").href("notes"), "/notes/a/b");
        assert_eq!(crumb("B", "a/b").href("/notes/"), "/notes/a/b");
    }

    #[test]
    fn href_without_prefix() {
        assert_eq!(route_href("", "a/b"), "/a/b");
        assert_eq!(route_href("", ""), "/");
        assert_eq!(route_href("notes", ""), "/notes");
    }

    #[test]
    fn formats_titles() {
        let trail = vec![crumb("Algorithms", "algo"), crumb("Sorting", "algo/sorting")];
        assert_eq!(format_trail(&trail, " › "), "Algorithms › Sorting");
        assert_eq!(format_trail(&[], " › "), "");
    }
}
