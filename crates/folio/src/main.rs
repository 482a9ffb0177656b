//! folio: browse and search a notebook of markdown notes.
//!
//! A notebook is a hand-written JSON content tree whose leaves point at numbered markdown
//! files. folio resolves routes against the tree the way the notes site does, prints the
//! breadcrumb trail and sidebar for a route, and runs a plain sequential keyword search
//! over every note the tree references.

mod cli;

use std::{
    env,
    io::{self, IsTerminal},
    process::ExitCode,
};

use cli::{CommandContext, args::parse_cli, commands};
use folio_highlight::set_color_enabled;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "FOLIO_LOG";

/// Installs the stderr log subscriber. Defaults to warnings only.
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Turns styling off for `NO_COLOR` and when stdout is not a terminal.
fn init_color() {
    let no_color = env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    set_color_enabled(!no_color && io::stdout().is_terminal());
}

fn main() -> ExitCode {
    init_tracing();
    init_color();

    let cli = parse_cli();
    let loaded = if cli.command.needs_config() {
        CommandContext::load(cli.notebook)
    } else {
        CommandContext::load_cwd_only()
    };
    let ctx = match loaded {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };
    commands::run(cli.command, &ctx)
}
