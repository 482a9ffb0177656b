//! Route resolution.
//!
//! Walks the content tree one route segment at a time. Every segment must address a child
//! of the topic reached so far; a segment that addresses nothing fails the whole route, so a
//! partially matched route is never reported as a success.

use thiserror::Error;

use crate::{Crumb, DocId, Topic, topic::find_child};

/// What a route resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target<'a> {
    /// The empty route: a listing of the top-level topics.
    Root,
    /// A topic with a document.
    Document {
        /// The document to show.
        id: DocId,
        /// The topic carrying it.
        topic: &'a Topic,
    },
    /// A topic without a document: a listing of its children.
    Listing(&'a Topic),
}

/// A successfully resolved route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<'a> {
    /// The resolved node.
    pub target: Target<'a>,
    /// One crumb per consumed segment, root first.
    pub trail: Vec<Crumb>,
    /// Child topics of the resolved node.
    children: &'a [Topic],
}

impl<'a> Resolution<'a> {
    /// Returns the document id, if the route resolved to a document.
    pub fn doc_id(&self) -> Option<DocId> {
        match self.target {
            Target::Document { id, .. } => Some(id),
            Target::Root | Target::Listing(_) => None,
        }
    }

    /// Returns the resolved topic, or `None` for the root.
    pub fn topic(&self) -> Option<&'a Topic> {
        match self.target {
            Target::Document { topic, .. } | Target::Listing(topic) => Some(topic),
            Target::Root => None,
        }
    }

    /// Returns the children of the resolved node.
    pub fn children(&self) -> &'a [Topic] {
        self.children
    }

    /// Returns the canonical path of the resolved node (empty for the root).
    pub fn path(&self) -> &str {
        self.trail.last().map_or("", |c| c.path.as_str())
    }

    /// Returns true if the route was empty.
    pub fn is_root(&self) -> bool {
        matches!(self.target, Target::Root)
    }
}

/// Errors from route resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// A segment addressed no child of the topic reached so far.
    #[error("not found: /{route} (no topic '{segment}' under {})", parent.as_deref().map_or_else(|| "the root".to_string(), |p| format!("'{p}'")))]
    NotFound {
        /// The full route that was requested, joined with `/`.
        route: String,
        /// Number of segments matched before the failure.
        consumed: usize,
        /// The segment that matched nothing.
        segment: String,
        /// Name of the last matched topic, `None` when failing at the root.
        parent: Option<String>,
    },
}

/// Splits a route into segments.
///
/// Empty segments are dropped, a query string or fragment is ignored, and a leading
/// `prefix` (such as `notes` or `docs/notes`) is stripped.
pub fn parse_route(route: &str, prefix: &str) -> Vec<String> {
    let route = route.split(['?', '#']).next().unwrap_or_default();
    let prefix = split_segments(prefix);

    let mut segments = split_segments(route);
    if !prefix.is_empty() && segments.starts_with(&prefix) {
        segments.drain(..prefix.len());
    }
    segments.into_iter().map(str::to_string).collect()
}

/// Splits on `/`, trimming segments and dropping empty ones.
fn split_segments(path: &str) -> Vec<&str> {
    path.split('/')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Resolves `segments` against the top-level `topics`.
pub fn resolve<'a, S: AsRef<str>>(
    topics: &'a [Topic],
    segments: &[S],
) -> Result<Resolution<'a>, ResolveError> {
    let mut trail: Vec<Crumb> = Vec::with_capacity(segments.len());
    let mut current: Option<&'a Topic> = None;
    let mut siblings = topics;

    for segment in segments {
        let segment = segment.as_ref();
        let Some(topic) = find_child(siblings, segment) else {
            return Err(ResolveError::NotFound {
                route: segments
                    .iter()
                    .map(AsRef::as_ref)
                    .collect::<Vec<_>>()
                    .join("/"),
                consumed: trail.len(),
                segment: segment.to_string(),
                parent: current.map(|t| t.name.clone()),
            });
        };

        let path = match trail.last() {
            Some(parent) => format!("{}/{}", parent.path, topic.segment),
            None => topic.segment.clone(),
        };
        trail.push(Crumb {
            title: topic.name.clone(),
            segment: topic.segment.clone(),
            path,
            doc: topic.doc,
        });

        current = Some(topic);
        siblings = &topic.children;
    }

    let target = match current {
        None => Target::Root,
        Some(topic) => match topic.doc {
            Some(id) => Target::Document { id, topic },
            None => Target::Listing(topic),
        },
    };

    Ok(Resolution {
        target,
        trail,
        children: siblings,
    })
}
