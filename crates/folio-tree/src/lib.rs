//! Content tree model and navigation for folio.
//!
//! A notebook is described by a hand-written JSON content tree: topics nest other topics,
//! and leaf topics point at markdown documents by numeric id. This crate handles:
//! - Loading and validating the content tree
//! - Resolving route segments to a document or a listing of child topics
//! - Breadcrumb trails and sidebar expand/collapse state
//! - Fetching and parsing the markdown documents themselves

#![warn(missing_docs)]

mod breadcrumb;
mod document;
mod error;
mod frontmatter;
mod id;
mod load;
mod resolve;
mod sidebar;
mod slug;
mod source;
mod topic;
mod tree;

pub use breadcrumb::{Crumb, format_trail, route_href};
pub use document::{Document, Heading, extract_headings};
pub use error::{DocumentError, TreeError};
pub use frontmatter::{Frontmatter, parse_frontmatter};
pub use id::{DocId, IdError};
pub use load::{DOC_KEY, URL_PATH_KEY};
pub use resolve::{ResolveError, Resolution, Target, parse_route};
pub use sidebar::{SidebarEntry, SidebarState};
pub use slug::{Slugifier, segment_slug};
pub use source::{DirSource, DocumentSource, MemorySource};
pub use topic::Topic;
pub use tree::{ContentTree, DocEntry, Preorder, TreeWarning, Visit};
