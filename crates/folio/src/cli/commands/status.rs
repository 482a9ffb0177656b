//! Implementation of `folio status`.

use std::{path::Path, process::ExitCode};

use folio_config::{Config, Notebook, discover_config_files, format_path_for_display};
use folio_tree::ContentTree;

use crate::cli::{
    context::CommandContext,
    output::{dim, subheader, warning},
};

/// Shows configuration files, notebooks and a summary of each content tree.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let cwd = &ctx.cwd;

    let config_files = discover_config_files(cwd);
    if config_files.is_empty() {
        println!("{}", dim("No configuration files found."));
        println!();
        println!(
            "Run {} to create a configuration file.",
            subheader("folio init")
        );
        return ExitCode::SUCCESS;
    }

    println!("{}", subheader("Config files:"));
    for path in &config_files {
        let display_path = format_path_for_display(path, Some(cwd));
        println!("   {display_path}");
    }
    println!();

    let config = &ctx.config;
    println!(
        "{} {}",
        subheader("Route prefix:"),
        if config.site.route_prefix.is_empty() {
            dim("(none)")
        } else {
            format!("/{}", config.site.route_prefix)
        }
    );
    println!();

    println!("{}", subheader("Notebooks:"));
    if config.notebooks.is_empty() {
        println!("   {}", dim("(none defined)"));
    }
    for notebook in &config.notebooks {
        print_notebook(config, notebook);
    }
    println!();

    let warnings = config.validate();
    if warnings.is_empty() {
        println!("No issues found.");
    } else {
        println!("{}", subheader(&format!("Warnings ({}):", warnings.len())));
        for w in &warnings {
            println!("   {}", warning(&w.to_string()));
        }
        println!();
        println!("{}", dim("Run 'folio check' for tree and file consistency."));
    }

    ExitCode::SUCCESS
}

/// Prints one notebook with its paths and tree size.
fn print_notebook(config: &Config, notebook: &Notebook) {
    let scope = if notebook.is_global { "global" } else { "local" };
    let base = if notebook.is_global {
        None
    } else {
        config.config_root.as_deref()
    };

    println!("   {} {}", notebook.name, dim(&format!("({scope})")));
    println!("      tree {}", path_line(&notebook.tree, base));
    println!("      docs {}", path_line(&notebook.docs, base));

    if let Ok(tree) = ContentTree::from_file(&notebook.tree) {
        println!(
            "      {}",
            dim(&format!(
                "{} topics, {} notes",
                tree.topic_count(),
                tree.documents().len()
            ))
        );
    }
}

/// Formats a path, flagging it when it does not exist.
fn path_line(path: &Path, base: Option<&Path>) -> String {
    let shown = dim(&format!("-> {}", format_path_for_display(path, base)));
    if path.exists() {
        shown
    } else {
        format!("{shown} {}", warning("[missing]"))
    }
}
