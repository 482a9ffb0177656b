//! Styled text helpers.

use std::ops::Range;

use crate::theme;

/// Formats a header with bold cyan styling.
pub fn header(text: &str) -> String {
    theme::HEADER.paint(text)
}

/// Formats text as a subheader (bold).
pub fn subheader(text: &str) -> String {
    theme::SUBHEADER.paint(text)
}

/// Formats text as dimmed/less important.
pub fn dim(text: &str) -> String {
    theme::DIM.paint(text)
}

/// Formats text as a success message (green).
pub fn success(text: &str) -> String {
    theme::SUCCESS.paint(text)
}

/// Formats text as a warning (yellow).
pub fn warning(text: &str) -> String {
    theme::WARNING.paint(text)
}

/// Formats a breadcrumb trail.
pub fn breadcrumb(text: &str) -> String {
    theme::BREADCRUMB.paint(text)
}

/// Indents every non-empty line by two spaces.
pub fn indent_content(text: &str) -> String {
    text.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("  {line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Emphasizes the given byte ranges of `body` with the match style.
///
/// Ranges must be sorted, non-overlapping, and on character boundaries.
pub fn format_body(body: &str, ranges: &[Range<usize>]) -> String {
    let prefix = theme::MATCH.prefix();
    let suffix = theme::MATCH.suffix();
    let mut out = String::with_capacity(body.len() + ranges.len() * 12);
    let mut cursor = 0;

    for range in ranges {
        if range.start < cursor || range.end > body.len() || range.start >= range.end {
            continue;
        }
        out.push_str(&body[cursor..range.start]);
        out.push_str(&prefix);
        out.push_str(&body[range.clone()]);
        out.push_str(suffix);
        cursor = range.end;
    }
    out.push_str(&body[cursor..]);
    out
}

/// Finds every occurrence of any term in `text`, longest term first at each position.
///
/// Terms are expected in the case they are matched with: lowercase unless `case_sensitive`.
pub fn match_ranges(text: &str, terms: &[&str], case_sensitive: bool) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();
    let mut pos = 0;

    while pos < text.len() {
        let rest = &text[pos..];
        let longest = terms
            .iter()
            .filter(|t| !t.is_empty())
            .filter_map(|t| prefix_len(rest, t, case_sensitive))
            .max();
        match longest {
            Some(len) if len > 0 => {
                ranges.push(pos..pos + len);
                pos += len;
            }
            _ => pos += rest.chars().next().map_or(1, char::len_utf8),
        }
    }
    ranges
}

/// Returns how many bytes of `hay` spell `term`, if `hay` starts with it.
fn prefix_len(hay: &str, term: &str, case_sensitive: bool) -> Option<usize> {
    if case_sensitive {
        return hay.starts_with(term).then_some(term.len());
    }
    let mut want = term.chars().peekable();
    for (i, ch) in hay.char_indices() {
        if want.peek().is_none() {
            return Some(i);
        }
        for lower in ch.to_lowercase() {
            if want.next() != Some(lower) {
                return None;
            }
        }
    }
    want.peek().is_none().then_some(hay.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::codes;

    #[test]
    fn header_is_bold_cyan() {
        let h = header("Test");
        assert!(h.contains(codes::BOLD));
        assert!(h.contains(codes::CYAN));
        assert!(h.contains("Test"));
    }

    #[test]
    fn indents_lines() {
        assert_eq!(indent_content("a\n\nb"), "  a\n\n  b");
    }

    #[test]
    fn finds_case_insensitive_matches() {
        let text = "Heap and HEAP, heaps";
        let ranges = match_ranges(text, &["heap"], false);
        let found: Vec<_> = ranges.iter().map(|r| &text[r.clone()]).collect();
        assert_eq!(found, vec!["Heap", "HEAP", "heap"]);
    }

    #[test]
    fn prefers_longest_term() {
        let text = "priority queue";
        let ranges = match_ranges(text, &["priority", "priority queue"], false);
        assert_eq!(ranges, vec![0..14]);
    }

    #[test]
    fn case_sensitive_matches() {
        let ranges = match_ranges("Heap heap", &["heap"], true);
        assert_eq!(ranges, vec![5..9]);
    }

    #[test]
    fn non_ascii_text() {
        let text = "Über über";
        let ranges = match_ranges(text, &["über"], false);
        assert_eq!(ranges.len(), 2);
        assert_eq!(&text[ranges[1].clone()], "über");
    }

    #[test]
    fn formats_ranges() {
        let out = format_body("find the heap here", &[9..13]);
        assert!(out.starts_with("find the "));
        assert!(out.contains(&format!("{}heap{}", theme::MATCH.prefix(), codes::RESET)));
        assert!(out.ends_with(" here"));
    }

    #[test]
    fn skips_bad_ranges() {
        assert_eq!(format_body("abc", &[5..9]), "abc");
    }
}
