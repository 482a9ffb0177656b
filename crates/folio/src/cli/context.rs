//! Shared context for running CLI commands.

use std::{
    env,
    path::{Path, PathBuf},
    process::ExitCode,
};

use folio_config::{Config, ConfigError, Notebook};
use folio_tree::{ContentTree, DirSource};
use tracing::debug;

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (may be default if no config files found).
    pub config: Config,
    /// Notebook selected with `--notebook`, if any.
    selected: Option<String>,
}

/// A notebook with its content tree loaded.
pub struct OpenNotebook {
    /// The parsed content tree.
    pub tree: ContentTree,
    /// Reads notes from the notebook's docs directory.
    pub source: DirSource,
}

impl CommandContext {
    /// Loads the current directory and configuration.
    pub fn load(selected: Option<String>) -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let config = load_config_or_failure(&cwd)?;
        Ok(Self {
            cwd,
            config,
            selected,
        })
    }

    /// Loads only the current directory, skipping configuration parsing.
    ///
    /// Used for `init`, which should work even when an existing config file is invalid.
    pub fn load_cwd_only() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        Ok(Self {
            cwd,
            config: Config::default(),
            selected: None,
        })
    }

    /// Returns the route prefix from the site settings.
    pub fn route_prefix(&self) -> &str {
        &self.config.site.route_prefix
    }

    /// Returns the notebooks a whole-configuration command should cover.
    ///
    /// That is the notebook chosen with `--notebook`, or every configured notebook.
    pub fn notebooks(&self) -> Result<Vec<&Notebook>, ExitCode> {
        match self.selected.as_deref() {
            Some(name) => match self.config.notebook(Some(name)) {
                Ok(notebook) => Ok(vec![notebook]),
                Err(e) => {
                    eprintln!("error: {e}");
                    Err(ExitCode::FAILURE)
                }
            },
            None => Ok(self.config.notebooks.iter().collect()),
        }
    }

    /// Selects the notebook to work on and loads its content tree.
    pub fn open_notebook(&self) -> Result<OpenNotebook, ExitCode> {
        let notebook = match self.config.notebook(self.selected.as_deref()) {
            Ok(notebook) => notebook,
            Err(e @ ConfigError::NoNotebooks) => {
                eprintln!("error: {e}");
                eprintln!(
                    "Run 'folio init' to create a configuration file, then add a notebook."
                );
                return Err(ExitCode::FAILURE);
            }
            Err(e) => {
                eprintln!("error: {e}");
                return Err(ExitCode::FAILURE);
            }
        };

        let tree = ContentTree::from_file(&notebook.tree).map_err(|e| {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        })?;
        debug!(
            notebook = %notebook.name,
            topics = tree.topic_count(),
            "loaded content tree"
        );

        let source = DirSource::new(notebook.docs.clone(), &notebook.extension);
        Ok(OpenNotebook { tree, source })
    }
}

/// Returns the current working directory or exits with a consistent error.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}

/// Loads configuration from the provided directory or exits with an error.
fn load_config_or_failure(cwd: &Path) -> Result<Config, ExitCode> {
    Config::load(cwd).map_err(|e| {
        eprintln!("error: failed to load configuration: {e}");
        ExitCode::FAILURE
    })
}
