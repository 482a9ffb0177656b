//! Implementation of `folio sidebar`.

use std::process::ExitCode;

use folio_highlight::theme;
use folio_tree::{ContentTree, SidebarEntry, SidebarState};
use serde::Serialize;

use crate::cli::{
    args::SidebarCommand,
    context::CommandContext,
    output::{breadcrumb, dim, print_json},
};

/// JSON output for `folio sidebar`.
#[derive(Serialize)]
struct JsonSidebarOutput<'a> {
    /// Canonical path of the current route, if one was given.
    active: Option<&'a str>,
    /// Expanded topic paths, sorted.
    expanded: Vec<&'a str>,
    /// Visible rows in display order.
    rows: Vec<JsonSidebarRow<'a>>,
}

/// A sidebar row with its link.
#[derive(Serialize)]
struct JsonSidebarRow<'a> {
    /// The row.
    #[serde(flatten)]
    entry: &'a SidebarEntry,
    /// Link under the route prefix.
    href: String,
}

/// Prints the sidebar as it appears on a route.
///
/// `--expand` paths are applied first, then the state is synced to the route, then
/// `--collapse` paths are applied.
pub fn run(ctx: &CommandContext, cmd: &SidebarCommand) -> ExitCode {
    let open = match ctx.open_notebook() {
        Ok(open) => open,
        Err(code) => return code,
    };
    let prefix = ctx.route_prefix();
    let tree = &open.tree;

    let mut state = SidebarState::new();
    for path in &cmd.expand {
        let Some(path) = canonical_path(tree, path, prefix) else {
            return ExitCode::FAILURE;
        };
        state.expand(&path);
    }

    let mut active = None;
    if let Some(route) = &cmd.route {
        let resolution = match tree.resolve_route(route, prefix) {
            Ok(resolution) => resolution,
            Err(e) => {
                eprintln!("error: {e}");
                return ExitCode::FAILURE;
            }
        };
        state.sync_to_route(&resolution);
        if !resolution.is_root() {
            active = Some(resolution.path().to_string());
        }
    }

    for path in &cmd.collapse {
        let Some(path) = canonical_path(tree, path, prefix) else {
            return ExitCode::FAILURE;
        };
        state.collapse(&path);
    }

    let entries = state.entries(tree, active.as_deref());

    if cmd.json {
        return print_json(&JsonSidebarOutput {
            active: active.as_deref(),
            expanded: state.expanded_paths().collect(),
            rows: entries
                .iter()
                .map(|entry| JsonSidebarRow {
                    entry,
                    href: entry.href(prefix),
                })
                .collect(),
        });
    }

    if entries.is_empty() {
        println!("{}", dim("The content tree is empty."));
    }
    for entry in &entries {
        println!("{}", format_entry(entry));
    }
    ExitCode::SUCCESS
}

/// Resolves a user-supplied path to the canonical path of its topic.
///
/// Paths may use topic names as well as url segments, like routes.
fn canonical_path(tree: &ContentTree, path: &str, prefix: &str) -> Option<String> {
    match tree.resolve_route(path, prefix) {
        Ok(resolution) => Some(resolution.path().to_string()),
        Err(e) => {
            eprintln!("error: {e}");
            None
        }
    }
}

/// Formats a row: disclosure marker, title, and document id.
fn format_entry(entry: &SidebarEntry) -> String {
    let indent = "  ".repeat(entry.depth);
    let marker = match (entry.has_children, entry.expanded) {
        (false, _) => " ",
        (true, true) => "▾",
        (true, false) => "▸",
    };
    let title = if entry.active {
        theme::ACTIVE.paint(&entry.title)
    } else if entry.in_trail {
        breadcrumb(&entry.title)
    } else {
        entry.title.clone()
    };
    match entry.doc {
        Some(id) => format!("{indent}{marker} {title} {}", dim(&format!("[{id}]"))),
        None => format!("{indent}{marker} {title}"),
    }
}
