//! YAML frontmatter at the top of a note.
//!
//! ```markdown
//! ---
//! title: Binary Search
//! tags: [algorithms, searching]
//! ---
//!
//! # Binary Search
//! ```

use serde::Deserialize;
use tracing::debug;

/// Metadata block of a note.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Frontmatter {
    /// Title overriding the first heading.
    pub title: Option<String>,
    /// Free-form tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Delimiter line opening and closing the block.
const FENCE: &str = "---";

/// Splits frontmatter from the body of a note.
///
/// Returns `None` and the whole input (minus a byte-order mark) when the note has no
/// block, the block is never closed, or its YAML does not parse.
pub fn parse_frontmatter(content: &str) -> (Option<Frontmatter>, &str) {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let Some((yaml, body)) = split_block(content) else {
        return (None, content);
    };

    if yaml.trim().is_empty() {
        return (Some(Frontmatter::default()), body);
    }
    match serde_yaml::from_str::<Frontmatter>(yaml) {
        Ok(fm) => (Some(fm), body),
        Err(e) => {
            debug!(error = %e, "ignoring malformed frontmatter");
            (None, content)
        }
    }
}

/// Returns the YAML between the fences and the body after them, one blank line skipped.
fn split_block(content: &str) -> Option<(&str, &str)> {
    let mut lines = content.split_inclusive('\n');
    let opening = lines.next()?;
    if opening.trim_end() != FENCE {
        return None;
    }
    let yaml_start = opening.len();

    let mut offset = yaml_start;
    for line in lines {
        if line.trim_end() == FENCE {
            let yaml = &content[yaml_start..offset];
            let body = &content[offset + line.len()..];
            let body = body
                .strip_prefix("\r\n")
                .or_else(|| body.strip_prefix('\n'))
                .unwrap_or(body);
            return Some((yaml, body));
        }
        offset += line.len();
    }
    None
}
