//! Clap argument definitions for the `folio` CLI.

use std::{env, process::exit};

use clap::{Args, CommandFactory, Parser, Subcommand, error::ErrorKind};

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Browse and search a notebook of markdown notes")]
pub struct Cli {
    /// Notebook to use when several are configured
    #[arg(short = 'b', long, global = true)]
    pub notebook: Option<String>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Shared output mode flags.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output titles and breadcrumbs only
    #[arg(long)]
    pub list: bool,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `folio search`.
#[derive(Args, Debug, Clone)]
pub struct SearchCommand {
    /// Search terms; several arguments are joined into one query
    #[arg(required = true)]
    pub queries: Vec<String>,

    /// Maximum results to return [default: 10]
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Match terms with exact case
    #[arg(long)]
    pub case_sensitive: bool,

    /// Verbosity level (-v for per-term counts and totals, -vv to report every note)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

impl SearchCommand {
    /// Returns the query text.
    pub fn query(&self) -> String {
        self.queries.join(" ")
    }
}

/// Arguments for `folio show`.
#[derive(Args, Debug, Clone)]
pub struct ShowCommand {
    /// Route to resolve, e.g. `/notes/algorithms/sorting`
    pub route: String,

    /// Print the note exactly as stored, frontmatter included
    #[arg(long)]
    pub raw: bool,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `folio ls`.
#[derive(Args, Debug, Clone)]
pub struct LsCommand {
    /// Route of the topic to list [default: the root]
    pub route: Option<String>,

    /// Show a table with paths and document ids
    #[arg(short = 'l', long)]
    pub long: bool,

    /// List the whole subtree
    #[arg(short = 'r', long)]
    pub recursive: bool,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `folio sidebar`.
#[derive(Args, Debug, Clone)]
pub struct SidebarCommand {
    /// Current route; its ancestors are expanded
    pub route: Option<String>,

    /// Also expand the topic at this path (repeatable)
    #[arg(long = "expand", value_name = "PATH")]
    pub expand: Vec<String>,

    /// Collapse the topic at this path after syncing to the route (repeatable)
    #[arg(long = "collapse", value_name = "PATH")]
    pub collapse: Vec<String>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `folio init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.folio.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `folio` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a route and print the note or topic listing
    #[command(after_help = "\
ROUTES:
  Routes are slash-separated segments, optionally starting with the configured
  route prefix. A segment matches a topic by its url path or by its name.

EXAMPLES:
  folio show /notes/algorithms/sorting
  folio show algorithms/Sorting
  folio show / --json")]
    Show(ShowCommand),

    /// List the topics under a route
    Ls(LsCommand),

    /// Print the sidebar as it appears for a route
    Sidebar(SidebarCommand),

    /// Search every note for keywords
    #[command(after_help = "\
QUERY SYNTAX:
  term              Count occurrences of term
  term1 term2       Notes matching more terms rank first
  \"phrase\"          Count the exact phrase

EXAMPLES:
  folio search heap
  folio search priority queue
  folio search '\"binary heap\"' -n 3")]
    Search(SearchCommand),

    /// Check configuration, content tree and note files
    Check,

    /// Show configuration files and notebooks
    Status,

    /// Show effective configuration settings
    Config,

    /// Initialize folio configuration in current directory
    Init(InitCommand),
}

impl Commands {
    /// Returns true if the command needs the configuration loaded.
    pub fn needs_config(&self) -> bool {
        !matches!(self, Self::Init(_))
    }
}

/// Parses CLI arguments, printing the command overview for top-level `--help`.
pub fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            if e.kind() == ErrorKind::DisplayHelp {
                let args: Vec<_> = env::args().collect();
                if args.len() <= 2 {
                    print_overview_help();
                    exit(0);
                }
            }
            e.exit();
        }
    }
}

/// Prints custom help listing each subcommand on one line.
fn print_overview_help() {
    let cmd = Cli::command();
    let about = cmd.get_about().map(|s| s.to_string()).unwrap_or_default();

    println!("{about}");
    println!();
    println!("Usage: folio [OPTIONS] <COMMAND>");
    println!();
    println!("Commands:");

    for sub in cmd.get_subcommands() {
        let name = sub.get_name();
        if name == "help" {
            continue;
        }
        let about = sub.get_about().map(|s| s.to_string()).unwrap_or_default();
        println!("  {name:10} {about}");
    }

    println!(
        "  {:<10} Print this message or the help of the given subcommand(s)",
        "help"
    );
    println!();
    println!("Options:");
    println!("  -b, --notebook <NOTEBOOK>  Notebook to use when several are configured");
    println!("  -h, --help                 Print help");
}
