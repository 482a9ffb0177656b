//! Implementation of `folio ls`.

use std::process::ExitCode;

use folio_tree::Target;

use crate::cli::{
    args::LsCommand,
    context::CommandContext,
    output::{dim, print_json, print_topic_rows, print_topic_table, topic_rows},
};

/// Lists the topics below a route, the root when no route is given.
pub fn run(ctx: &CommandContext, cmd: &LsCommand) -> ExitCode {
    let open = match ctx.open_notebook() {
        Ok(open) => open,
        Err(code) => return code,
    };
    let prefix = ctx.route_prefix();

    let route = cmd.route.as_deref().unwrap_or_default();
    let resolution = match open.tree.resolve_route(route, prefix) {
        Ok(resolution) => resolution,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let rows = topic_rows(
        resolution.children(),
        resolution.path(),
        prefix,
        cmd.recursive,
    );

    if cmd.json {
        return print_json(&rows);
    }

    if rows.is_empty() {
        let what = match resolution.target {
            Target::Root => "The content tree is empty.",
            Target::Document { .. } => "This note has no child topics.",
            Target::Listing(_) => "No topics.",
        };
        println!("{}", dim(what));
        return ExitCode::SUCCESS;
    }

    if cmd.long {
        print_topic_table(&rows);
    } else {
        print_topic_rows(&rows);
    }
    ExitCode::SUCCESS
}
