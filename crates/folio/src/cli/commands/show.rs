//! Implementation of `folio show`.

use std::process::ExitCode;

use folio_highlight::Highlighter;
use folio_tree::{Crumb, DocId, Document, DocumentSource, Resolution, Target, route_href};
use serde::Serialize;
use tracing::debug;

use crate::cli::{
    args::ShowCommand,
    context::{CommandContext, OpenNotebook},
    output::{
        TopicRow, dim, header, print_json, print_topic_rows, subheader, topic_rows, trail_line,
    },
};

/// JSON output for `folio show`.
#[derive(Serialize)]
struct JsonShowOutput<'a> {
    /// `document` or `listing`.
    kind: &'static str,
    /// Canonical path of the resolved topic.
    path: &'a str,
    /// Canonical link of the resolved topic.
    href: String,
    /// Breadcrumb trail, one crumb per route segment.
    trail: &'a [Crumb],
    /// The parsed note, for documents.
    #[serde(skip_serializing_if = "Option::is_none")]
    document: Option<&'a Document>,
    /// Child topics.
    children: Vec<TopicRow>,
}

/// Resolves a route and prints the note or the topic listing it addresses.
pub fn run(ctx: &CommandContext, cmd: &ShowCommand) -> ExitCode {
    let open = match ctx.open_notebook() {
        Ok(open) => open,
        Err(code) => return code,
    };
    let prefix = ctx.route_prefix();

    let resolution = match open.tree.resolve_route(&cmd.route, prefix) {
        Ok(resolution) => resolution,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    debug!(route = %cmd.route, path = resolution.path(), "resolved route");

    match resolution.target {
        Target::Document { id, topic } => {
            let Some(raw) = fetch_or_report(&open, id) else {
                return ExitCode::FAILURE;
            };
            if cmd.raw {
                print!("{raw}");
                return ExitCode::SUCCESS;
            }
            let doc = Document::parse(id, &raw, &topic.name);
            show_document(&resolution, &doc, prefix, cmd.json)
        }
        Target::Root | Target::Listing(_) => {
            if cmd.raw {
                eprintln!(
                    "error: {} is a topic listing, not a note",
                    route_href(prefix, resolution.path())
                );
                return ExitCode::FAILURE;
            }
            show_listing(&resolution, prefix, cmd.json)
        }
    }
}

/// Fetches a note, printing an error if it cannot be read.
fn fetch_or_report(open: &OpenNotebook, id: DocId) -> Option<String> {
    match open.source.fetch(id) {
        Ok(raw) => Some(raw),
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!(
                "{}",
                dim(&format!("expected at {}", open.source.path_for(id).display()))
            );
            None
        }
    }
}

/// Prints a note with its breadcrumb trail and any child topics.
fn show_document(
    resolution: &Resolution<'_>,
    doc: &Document,
    prefix: &str,
    json: bool,
) -> ExitCode {
    let children = topic_rows(resolution.children(), resolution.path(), prefix, false);

    if json {
        return print_json(&JsonShowOutput {
            kind: "document",
            path: resolution.path(),
            href: route_href(prefix, resolution.path()),
            trail: &resolution.trail,
            document: Some(doc),
            children,
        });
    }

    println!(
        "─── {} {} ───",
        header(&doc.title),
        dim(&format!("[{}]", doc.id))
    );
    println!("{}", trail_line(&resolution.trail));
    println!();

    let highlighter = Highlighter::new();
    let body = highlighter.highlight_markdown(doc.body.trim_end());
    println!("{body}");

    if !children.is_empty() {
        println!();
        println!("{}", subheader("Topics:"));
        print_topic_rows(&children);
    }
    ExitCode::SUCCESS
}

/// Prints the child topics of a listing route.
fn show_listing(resolution: &Resolution<'_>, prefix: &str, json: bool) -> ExitCode {
    let children = topic_rows(resolution.children(), resolution.path(), prefix, false);

    if json {
        return print_json(&JsonShowOutput {
            kind: "listing",
            path: resolution.path(),
            href: route_href(prefix, resolution.path()),
            trail: &resolution.trail,
            document: None,
            children,
        });
    }

    let title = resolution.topic().map_or("Notes", |t| t.name.as_str());
    println!("─── {} ───", header(title));
    println!("{}", trail_line(&resolution.trail));
    println!();
    print_topic_rows(&children);
    ExitCode::SUCCESS
}
