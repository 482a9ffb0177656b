//! Configuration file parsing.
//!
//! Parses individual `.folio.toml` files into intermediate `RawConfig` structures
//! that preserve the optional nature of all fields before merging.

use std::{collections::BTreeMap, fs, path::Path};

use serde::Deserialize;
use serde_with::{OneOrMany, serde_as};

use crate::ConfigError;

/// Raw configuration as parsed directly from a TOML file.
///
/// All fields are optional to support partial configs that will be merged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// When true, stop discovery here - ignore parent and global configs.
    pub root: Option<bool>,
    /// Site settings section.
    pub site: Option<RawSiteSettings>,
    /// Search settings section.
    pub search: Option<RawSearchSettings>,
    /// Notebook definitions: name -> notebook config.
    ///
    /// Ordered by name so merged notebooks come out in a stable order.
    pub notebook: Option<BTreeMap<String, RawNotebook>>,
}

/// Raw notebook definition from TOML.
#[serde_as]
#[derive(Debug, Clone, Deserialize)]
pub struct RawNotebook {
    /// Path to the content tree JSON file.
    pub tree: String,
    /// Path to the markdown directory.
    pub docs: String,
    /// Document extension (defaults to `md`).
    pub extension: Option<String>,
    /// Exclude pattern(s); a single string or an array.
    #[serde_as(as = "Option<OneOrMany<_>>")]
    #[serde(default)]
    pub exclude: Option<Vec<String>>,
}

/// Raw site settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSiteSettings {
    /// Route prefix stripped from routes.
    pub route_prefix: Option<String>,
}

/// Raw search settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSearchSettings {
    /// Maximum results.
    pub limit: Option<usize>,
    /// Snippet width in characters.
    pub snippet_width: Option<usize>,
    /// Minimum search term length.
    pub min_term_length: Option<usize>,
    /// Case sensitive matching.
    pub case_sensitive: Option<bool>,
}

/// Parses a configuration file from disk.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Checks if a config file has `root = true` set.
///
/// Returns false if the file cannot be read or parsed.
pub fn is_root_config(path: &Path) -> bool {
    let Ok(contents) = fs::read_to_string(path) else {
        return false;
    };
    let Ok(config) = toml::from_str::<RawConfig>(&contents) else {
        return false;
    };
    config.root == Some(true)
}
