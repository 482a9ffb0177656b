//! Implementation of `folio config`.

use std::process::ExitCode;

use folio_config::Notebook;
use folio_highlight::Highlighter;

use crate::cli::context::CommandContext;

/// Shows effective settings followed by the resolved notebooks.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let config = &ctx.config;
    let mut toml = config.settings_to_toml();
    for notebook in &config.notebooks {
        toml.push('\n');
        toml.push_str(&notebook_to_toml(notebook));
    }

    let highlighter = Highlighter::new();
    print!("{}", highlighter.highlight_toml(&toml));
    ExitCode::SUCCESS
}

/// Renders a notebook table with its resolved paths.
fn notebook_to_toml(notebook: &Notebook) -> String {
    let mut out = format!("[notebook.{}]\n", notebook.name);
    out.push_str(&format!("tree = {}\n", quote(&notebook.tree.to_string_lossy())));
    out.push_str(&format!("docs = {}\n", quote(&notebook.docs.to_string_lossy())));
    out.push_str(&format!("extension = {}\n", quote(&notebook.extension)));
    if !notebook.exclude.is_empty() {
        let patterns: Vec<String> = notebook.exclude.iter().map(|p| quote(p)).collect();
        out.push_str(&format!("exclude = [{}]\n", patterns.join(", ")));
    }
    if notebook.is_global {
        out.push_str("# from ~/.folio.toml\n");
    }
    out
}

/// Quotes a string as a TOML literal string, falling back to a basic string.
fn quote(value: &str) -> String {
    if value.contains('\'') || value.contains('\n') {
        format!("{value:?}")
    } else {
        format!("'{value}'")
    }
}
