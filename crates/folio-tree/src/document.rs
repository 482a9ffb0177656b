//! Parsed markdown notes.

use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};
use serde::Serialize;

use crate::{DocId, Slugifier, parse_frontmatter};

/// A heading in a note's outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    /// Heading level, 1 through 6.
    pub level: u8,
    /// Heading text, inline code included.
    pub text: String,
    /// Anchor slug, unique within the note.
    pub slug: String,
    /// Byte offset of the heading within the body.
    pub offset: usize,
}

/// A markdown note with its metadata split out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    /// Document id.
    pub id: DocId,
    /// Display title.
    pub title: String,
    /// Tags from frontmatter.
    pub tags: Vec<String>,
    /// Markdown after the frontmatter.
    pub body: String,
    /// Headings in document order.
    pub outline: Vec<Heading>,
}

impl Document {
    /// Parses raw note text.
    ///
    /// The title is the frontmatter title, else the text of the first level-1 heading, else
    /// `fallback_title` (usually the topic name).
    pub fn parse(id: DocId, raw: &str, fallback_title: &str) -> Self {
        let (frontmatter, body) = parse_frontmatter(raw);
        let frontmatter = frontmatter.unwrap_or_default();
        let outline = extract_headings(body);

        let title = frontmatter
            .title
            .filter(|t| !t.trim().is_empty())
            .or_else(|| {
                outline
                    .iter()
                    .find(|h| h.level == 1)
                    .map(|h| h.text.clone())
            })
            .unwrap_or_else(|| fallback_title.to_string());

        Self {
            id,
            title,
            tags: frontmatter.tags,
            body: body.to_string(),
            outline,
        }
    }
}

/// Extracts every heading from markdown, with unique anchor slugs.
pub fn extract_headings(markdown: &str) -> Vec<Heading> {
    let mut slugs = Slugifier::new();
    let mut headings = Vec::new();
    let mut open: Option<(u8, usize, String)> = None;

    for (event, range) in Parser::new(markdown).into_offset_iter() {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                open = Some((level_number(level), range.start, String::new()));
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some((_, _, buf)) = open.as_mut() {
                    buf.push_str(&text);
                }
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some((level, offset, text)) = open.take() {
                    let text = text.trim().to_string();
                    headings.push(Heading {
                        level,
                        slug: slugs.slugify(&text),
                        text,
                        offset,
                    });
                }
            }
            _ => {}
        }
    }

    headings
}

/// Numeric level of a heading.
fn level_number(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}
