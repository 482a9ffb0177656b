//! Rendering and JSON serialization for CLI output.

use std::process::ExitCode;

use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};
use folio_highlight::{format_body, match_ranges};
pub use folio_highlight::{breadcrumb, dim, header, subheader, success, warning};
use folio_search::{Query, SearchHit, SearchOutcome, SearchStats};
use folio_tree::{Crumb, DocId, Topic, format_trail, route_href};
use serde::Serialize;

use crate::cli::args::OutputArgs;

/// Separator between breadcrumb titles.
pub const TRAIL_SEPARATOR: &str = " › ";

/// JSON output for `folio search`.
#[derive(Serialize)]
struct JsonSearchOutput<'a> {
    /// The query as typed.
    query: &'a str,
    /// Terms that were counted, after parsing.
    terms: Vec<&'a str>,
    /// Ranked hits.
    hits: &'a [SearchHit],
    /// Scan counters.
    stats: SearchStats,
}

/// One topic in a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicRow {
    /// Depth below the listed topic (0 for its direct children).
    pub depth: usize,
    /// Topic name.
    pub title: String,
    /// Canonical path.
    pub path: String,
    /// Link under the route prefix.
    pub href: String,
    /// Document of the topic, if any.
    pub doc: Option<DocId>,
    /// True if the topic has children.
    pub has_children: bool,
}

/// Rendering style for search hits.
#[derive(Clone, Copy)]
enum DisplayMode {
    /// Header, trail and highlighted snippet.
    Full,
    /// Header and trail only.
    List,
}

/// Prints a value as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json_str) => {
            println!("{json_str}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Formats a breadcrumb trail for display; the root has an empty trail.
pub fn trail_line(trail: &[Crumb]) -> String {
    if trail.is_empty() {
        dim("(root)")
    } else {
        breadcrumb(&format_trail(trail, TRAIL_SEPARATOR))
    }
}

/// Joins a canonical parent path and a child segment.
pub fn join_path(parent: &str, segment: &str) -> String {
    if parent.is_empty() {
        segment.to_string()
    } else {
        format!("{parent}/{segment}")
    }
}

/// Lists `children` of the topic at `parent`, descending into every subtree if `recursive`.
pub fn topic_rows(
    children: &[Topic],
    parent: &str,
    prefix: &str,
    recursive: bool,
) -> Vec<TopicRow> {
    let mut rows = Vec::new();
    collect_rows(children, parent, prefix, recursive, 0, &mut rows);
    rows
}

/// Appends rows for `topics`, in tree order.
fn collect_rows(
    topics: &[Topic],
    parent: &str,
    prefix: &str,
    recursive: bool,
    depth: usize,
    rows: &mut Vec<TopicRow>,
) {
    for topic in topics {
        let path = join_path(parent, &topic.segment);
        rows.push(TopicRow {
            depth,
            title: topic.name.clone(),
            href: route_href(prefix, &path),
            path: path.clone(),
            doc: topic.doc,
            has_children: topic.has_children(),
        });
        if recursive {
            collect_rows(&topic.children, &path, prefix, recursive, depth + 1, rows);
        }
    }
}

/// Prints topic rows as an indented list.
pub fn print_topic_rows(rows: &[TopicRow]) {
    if rows.is_empty() {
        println!("{}", dim("(no topics)"));
        return;
    }
    for row in rows {
        println!("{}", format_topic_row(row));
    }
}

/// Formats one listing line: name, then a marker for child topics and the document id.
fn format_topic_row(row: &TopicRow) -> String {
    let indent = "  ".repeat(row.depth);
    let name = if row.has_children {
        header(&format!("{}/", row.title))
    } else {
        row.title.clone()
    };
    match row.doc {
        Some(id) => format!("{indent}{name} {}", dim(&format!("[{id}]"))),
        None => format!("{indent}{name}"),
    }
}

/// Prints topic rows as a table with paths and document ids.
pub fn print_topic_table(rows: &[TopicRow]) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Topic", "Path", "Doc", "Children"]);
    for row in rows {
        table.add_row(vec![
            Cell::new(format!("{}{}", "  ".repeat(row.depth), row.title)),
            Cell::new(&row.href),
            Cell::new(row.doc.map(|id| id.to_string()).unwrap_or_default()),
            Cell::new(if row.has_children { "yes" } else { "" }),
        ]);
    }
    println!("{table}");
}

/// Outputs search results in the selected format.
pub fn output_search_results(
    outcome: &SearchOutcome,
    input: &str,
    query: &Query,
    output: &OutputArgs,
    verbose: u8,
) -> ExitCode {
    let terms: Vec<&str> = query.terms().iter().map(|t| t.text.as_str()).collect();

    if output.json {
        return print_json(&JsonSearchOutput {
            query: input,
            terms,
            hits: &outcome.hits,
            stats: outcome.stats,
        });
    }

    let mode = if output.list {
        DisplayMode::List
    } else {
        DisplayMode::Full
    };

    if outcome.hits.is_empty() {
        println!("{}", dim("No results found."));
    }

    for hit in &outcome.hits {
        print!(
            "{}",
            format_hit(hit, &terms, query.is_case_sensitive(), verbose, mode)
        );
    }

    if verbose > 0 {
        let stats = &outcome.stats;
        let mut summary = vec![
            format!("{} results", outcome.hits.len()),
            format!("{} matched", stats.matched),
            format!("{} scanned", stats.scanned),
        ];
        if stats.failed > 0 {
            summary.push(format!("{} unreadable", stats.failed));
        }
        println!("{}", dim(&format!("─── {} ───", summary.join(", "))));
    }

    ExitCode::SUCCESS
}

/// Formats one hit for the given display mode.
fn format_hit(
    hit: &SearchHit,
    terms: &[&str],
    case_sensitive: bool,
    verbose: u8,
    mode: DisplayMode,
) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "─── {} {} ───\n",
        header(&hit.title),
        dim(&format!("[{}]", hit.id))
    ));
    output.push_str(&format!("{}\n", trail_line(&hit.trail)));

    if verbose > 0 {
        output.push_str(&format!("{}\n", dim(&format_term_counts(hit))));
    }

    match mode {
        DisplayMode::Full => {
            if !hit.snippet.is_empty() {
                let ranges = match_ranges(&hit.snippet, terms, case_sensitive);
                output.push('\n');
                output.push_str(&format_body(&hit.snippet, &ranges));
                output.push('\n');
            }
            output.push('\n');
        }
        DisplayMode::List => {}
    }

    output
}

/// Summarizes per-term counts, e.g. `heap ×3, queue ×1 (2 terms, 4 occurrences)`.
fn format_term_counts(hit: &SearchHit) -> String {
    let counts: Vec<String> = hit
        .term_counts
        .iter()
        .filter(|t| t.count > 0)
        .map(|t| format!("{} ×{}", t.term, t.count))
        .collect();
    format!(
        "{} ({} terms, {} occurrences)",
        counts.join(", "),
        hit.matched_terms,
        hit.occurrences
    )
}
