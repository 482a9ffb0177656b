//! Implementation of `folio check`.

use std::process::ExitCode;

use folio_config::{ConfigWarning, Notebook, discover_config_files, format_path_for_display};
use folio_search::{check_consistency, discover_documents};
use folio_tree::ContentTree;

use crate::cli::{
    context::CommandContext,
    output::{dim, subheader, success, warning},
};

/// Exit codes for `folio check`.
mod exit_codes {
    use std::process::ExitCode;

    /// Everything is consistent.
    pub const OK: ExitCode = ExitCode::SUCCESS;
    /// Problems were found.
    pub const PROBLEMS: ExitCode = ExitCode::FAILURE;
}

/// Checks configuration, content trees and note files.
///
/// Exits with success only if nothing was reported.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let config_files = discover_config_files(&ctx.cwd);
    if config_files.is_empty() {
        println!("{}", dim("No configuration files found."));
        println!();
        println!(
            "Run {} to create a configuration file.",
            subheader("folio init")
        );
        return exit_codes::OK;
    }

    let notebooks = match ctx.notebooks() {
        Ok(notebooks) => notebooks,
        Err(code) => return code,
    };

    // With --notebook, warnings about other notebooks are not this run's concern.
    let mut warnings = ctx.config.validate();
    warnings.retain(|w| {
        w.notebook()
            .is_none_or(|name| notebooks.iter().any(|nb| nb.name == name))
    });
    let mut problems = warnings.len();
    if !warnings.is_empty() {
        println!(
            "{}",
            subheader(&format!("Configuration ({}):", warnings.len()))
        );
        for w in &warnings {
            println!("   {}", warning(&w.to_string()));
        }
        print_hints(&warnings);
        println!();
    }

    for notebook in notebooks {
        problems += check_notebook(ctx, notebook);
    }

    if problems == 0 {
        println!("{}", success("No issues found."));
        exit_codes::OK
    } else {
        println!("{}", warning(&format!("{problems} issue(s) found.")));
        exit_codes::PROBLEMS
    }
}

/// Checks one notebook's tree and files, printing what it finds. Returns the problem count.
fn check_notebook(ctx: &CommandContext, notebook: &Notebook) -> usize {
    println!("{}", subheader(&format!("Notebook {}:", notebook.name)));

    if !notebook.tree.is_file() {
        println!("   {}", dim("skipped: tree file missing"));
        println!();
        return 0;
    }
    let tree = match ContentTree::from_file(&notebook.tree) {
        Ok(tree) => tree,
        Err(e) => {
            println!("   {}", warning(&e.to_string()));
            println!();
            return 1;
        }
    };
    println!(
        "   {}",
        dim(&format!(
            "{} topics, {} notes",
            tree.topic_count(),
            tree.documents().len()
        ))
    );

    let mut problems = 0;
    for w in tree.validate() {
        println!("   {}", warning(&w.to_string()));
        problems += 1;
    }

    let Ok(exclude) = notebook.exclude_patterns() else {
        println!("   {}", dim("skipped file check: invalid exclude patterns"));
        println!();
        return problems;
    };
    if !notebook.docs.is_dir() {
        println!("   {}", dim("skipped file check: docs directory missing"));
        println!();
        return problems;
    }

    let files = match discover_documents(&notebook.docs, &notebook.extension, &exclude) {
        Ok(files) => files,
        Err(e) => {
            println!("   {}", warning(&e.to_string()));
            println!();
            return problems + 1;
        }
    };
    let report = check_consistency(&tree, &files);

    for doc in &report.missing {
        println!(
            "   {}",
            warning(&format!(
                "note {} is missing (referenced by '{}')",
                doc.id,
                doc.path()
            ))
        );
    }
    let base = ctx.config.config_root.as_deref();
    for orphan in &report.orphans {
        let path = notebook.docs.join(orphan);
        println!(
            "   {}",
            warning(&format!(
                "{} is not referenced by the content tree",
                format_path_for_display(&path, base)
            ))
        );
    }
    problems += report.missing.len() + report.orphans.len();

    println!();
    problems
}

/// Prints hints for resolving common warnings.
fn print_hints(warnings: &[ConfigWarning]) {
    for w in warnings {
        match w {
            ConfigWarning::NoNotebooksDefined => {
                println!("{}", dim("Hint: add [notebook.NAME] sections to .folio.toml"));
            }
            ConfigWarning::TreeFileMissing { .. } => {
                println!("{}", dim("Hint: check the notebook's tree path"));
            }
            _ => {}
        }
    }
}
