//! Configuration system for folio.
//!
//! folio uses TOML configuration files named `.folio.toml`. Configuration is resolved by walking
//! up the directory tree from the current working directory, collecting any `.folio.toml` files
//! found, then loading `~/.folio.toml` as the global config with lowest precedence.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod patterns;
mod resolve;
mod templates;
#[cfg(test)]
mod test_support;
mod validate;

use std::path::{Path, PathBuf};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{
    RawConfig, RawNotebook, RawSearchSettings, RawSiteSettings, parse_config_file,
    parse_config_str,
};
pub use patterns::ExcludePatterns;
pub use resolve::{format_path_for_display, resolve_notebook_path};
use serde::{Deserialize, Serialize};
pub use templates::{global_template, local_template};
pub use validate::ConfigWarning;
use validate::validate_config;

/// Default number of search results.
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Default snippet width in characters.
pub const DEFAULT_SNIPPET_WIDTH: usize = 120;

/// Default minimum length of a search term.
pub const DEFAULT_MIN_TERM_LENGTH: usize = 2;

/// Default route prefix for notes URLs.
pub const DEFAULT_ROUTE_PREFIX: &str = "notes";

/// Default markdown file extension.
pub const DEFAULT_EXTENSION: &str = "md";

/// Top-level merged configuration for folio.
///
/// This represents the fully resolved configuration after merging all discovered
/// `.folio.toml` files according to precedence rules.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Site-wide settings.
    pub site: SiteSettings,
    /// Search-related settings.
    pub search: SearchSettings,
    /// Resolved notebooks with their absolute paths.
    pub notebooks: Vec<Notebook>,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.folio.toml` files.
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        if files.is_empty() {
            return Ok(Self::default());
        }

        let parsed: Vec<ParsedConfig> = files
            .iter()
            .map(|path| {
                let config = parse_config_file(path)?;
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        merge_configs(&parsed)
    }

    /// Selects a notebook by name.
    ///
    /// With no name, the only configured notebook is returned; it is an error to omit the
    /// name when several notebooks exist.
    pub fn notebook(&self, name: Option<&str>) -> Result<&Notebook, ConfigError> {
        match name {
            Some(name) => self
                .notebooks
                .iter()
                .find(|nb| nb.name == name)
                .ok_or_else(|| ConfigError::UnknownNotebook {
                    name: name.to_string(),
                }),
            None => match self.notebooks.as_slice() {
                [] => Err(ConfigError::NoNotebooks),
                [only] => Ok(only),
                many => Err(ConfigError::AmbiguousNotebook {
                    names: many.iter().map(|nb| nb.name.clone()).collect(),
                }),
            },
        }
    }

    /// Validates the configuration and returns any warnings.
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Serializes the effective settings to TOML format.
    ///
    /// Notebooks are not included since they carry resolved paths.
    pub fn settings_to_toml(&self) -> String {
        let serializable = SerializableSettings {
            site: self.site.clone(),
            search: self.search.clone(),
        };
        toml::to_string_pretty(&serializable).unwrap_or_default()
    }
}

/// Site-wide settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SiteSettings {
    /// Leading route segment stripped from routes and prepended to hrefs.
    pub route_prefix: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            route_prefix: DEFAULT_ROUTE_PREFIX.to_string(),
        }
    }
}

/// Search-related settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Maximum results to return.
    pub limit: usize,
    /// Width of result snippets in characters.
    pub snippet_width: usize,
    /// Terms shorter than this are ignored.
    pub min_term_length: usize,
    /// Whether term matching is case sensitive.
    pub case_sensitive: bool,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            limit: DEFAULT_SEARCH_LIMIT,
            snippet_width: DEFAULT_SNIPPET_WIDTH,
            min_term_length: DEFAULT_MIN_TERM_LENGTH,
            case_sensitive: false,
        }
    }
}

/// Internal struct for TOML serialization of settings.
#[derive(Serialize)]
struct SerializableSettings {
    /// Site settings.
    site: SiteSettings,
    /// Search settings.
    search: SearchSettings,
}

/// A named notebook: a content tree file plus the directory holding its documents.
#[derive(Debug, Clone)]
pub struct Notebook {
    /// Name of the notebook.
    pub name: String,
    /// Resolved path to the content tree JSON file.
    pub tree: PathBuf,
    /// Resolved path to the markdown directory.
    pub docs: PathBuf,
    /// Document file extension, without the dot.
    pub extension: String,
    /// Glob patterns (relative to `docs`) ignored by consistency checks.
    pub exclude: Vec<String>,
    /// Whether this notebook was defined in the global `~/.folio.toml`.
    pub is_global: bool,
}

impl Notebook {
    /// Compiles this notebook's exclude patterns.
    pub fn exclude_patterns(&self) -> Result<ExcludePatterns, ConfigError> {
        ExcludePatterns::compile(&self.exclude)
    }
}
