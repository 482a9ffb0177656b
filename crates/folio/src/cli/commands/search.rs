//! Implementation of `folio search`.

use std::process::ExitCode;

use folio_search::{
    ProgressReporter, Query, SearchParams, SearchStats, Searcher, SilentReporter,
};
use folio_tree::DocId;

use crate::cli::{
    args::SearchCommand,
    context::CommandContext,
    output::{dim, output_search_results, warning},
};

/// Prints one line per scanned note to stderr.
struct StderrReporter;

impl ProgressReporter for StderrReporter {
    fn on_document_start(&mut self, _id: DocId, _current: usize, _total: usize) {}

    fn on_document_done(&mut self, id: DocId, occurrences: usize) {
        eprintln!("{}", dim(&format!("scanned {id}: {occurrences} occurrences")));
    }

    fn on_document_error(&mut self, id: DocId, error: &str) {
        eprintln!("{}", warning(&format!("skipped {id}: {error}")));
    }

    fn on_complete(&mut self, stats: &SearchStats) {
        eprintln!(
            "{}",
            dim(&format!(
                "{} scanned, {} matched, {} unreadable",
                stats.scanned, stats.matched, stats.failed
            ))
        );
    }
}

/// Scans every note in the notebook and prints the best matches.
pub fn run(ctx: &CommandContext, cmd: &SearchCommand) -> ExitCode {
    let mut params = SearchParams::from(&ctx.config.search);
    if let Some(limit) = cmd.limit {
        params = params.with_limit(limit);
    }
    if cmd.case_sensitive {
        params = params.with_case_sensitive(true);
    }

    let input = cmd.query();
    let query = match Query::parse(&input, &params) {
        Ok(query) => query,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let open = match ctx.open_notebook() {
        Ok(open) => open,
        Err(code) => return code,
    };

    let searcher = Searcher::new(&open.tree, &open.source, params);
    let outcome = if cmd.verbose > 1 {
        searcher.search(&query, &mut StderrReporter)
    } else {
        searcher.search(&query, &mut SilentReporter)
    };

    output_search_results(&outcome, &input, &query, &cmd.output, cmd.verbose)
}
