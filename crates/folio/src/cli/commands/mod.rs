//! Command implementations and dispatch.

pub mod check;
pub mod config;
pub mod init;
pub mod ls;
pub mod search;
pub mod show;
pub mod sidebar;
pub mod status;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: Commands, ctx: &CommandContext) -> ExitCode {
    match command {
        Commands::Show(cmd) => show::run(ctx, &cmd),
        Commands::Ls(cmd) => ls::run(ctx, &cmd),
        Commands::Sidebar(cmd) => sidebar::run(ctx, &cmd),
        Commands::Search(cmd) => search::run(ctx, &cmd),
        Commands::Check => check::run(ctx),
        Commands::Status => status::run(ctx),
        Commands::Config => config::run(ctx),
        Commands::Init(cmd) => init::run(ctx, &cmd),
    }
}
