//! Configuration merging.
//!
//! Merges parsed configuration files in precedence order:
//! - Scalar settings: the closest file that defines a value wins
//! - Notebooks: the first definition of each name wins
//! - Relative notebook paths resolve against the directory of the file that defines them

use std::path::PathBuf;

use crate::{
    Config, ConfigError, DEFAULT_EXTENSION, Notebook, RawConfig, SearchSettings, SiteSettings,
    discovery::is_global_config,
    parse::{RawSearchSettings, RawSiteSettings},
    resolve::resolve_notebook_path,
};

/// A parsed configuration file together with its location.
#[derive(Debug, Clone)]
pub struct ParsedConfig {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Parsed contents.
    pub config: RawConfig,
}

/// Merges parsed configs, highest precedence first, into a resolved `Config`.
pub fn merge_configs(configs: &[ParsedConfig]) -> Result<Config, ConfigError> {
    if configs.is_empty() {
        return Ok(Config::default());
    }

    let site = merge_site_settings(configs);
    let search = merge_search_settings(configs);
    let notebooks = merge_notebooks(configs)?;
    let config_root = configs
        .first()
        .and_then(|c| c.path.parent().map(|p| p.to_path_buf()));

    Ok(Config {
        site,
        search,
        notebooks,
        config_root,
    })
}

/// Merges site settings.
fn merge_site_settings(configs: &[ParsedConfig]) -> SiteSettings {
    let mut result = SiteSettings::default();

    // Lowest precedence first so closer files overwrite
    for parsed in configs.iter().rev() {
        if let Some(ref site) = parsed.config.site {
            apply_raw_site(&mut result, site);
        }
    }

    result
}

/// Applies raw site settings to result.
fn apply_raw_site(result: &mut SiteSettings, raw: &RawSiteSettings) {
    if let Some(ref v) = raw.route_prefix {
        result.route_prefix = v.trim_matches('/').to_string();
    }
}

/// Merges search settings.
fn merge_search_settings(configs: &[ParsedConfig]) -> SearchSettings {
    let mut result = SearchSettings::default();

    for parsed in configs.iter().rev() {
        if let Some(ref search) = parsed.config.search {
            apply_raw_search(&mut result, search);
        }
    }

    result
}

/// Applies raw search settings to result.
fn apply_raw_search(result: &mut SearchSettings, raw: &RawSearchSettings) {
    if let Some(v) = raw.limit {
        result.limit = v;
    }
    if let Some(v) = raw.snippet_width {
        result.snippet_width = v;
    }
    if let Some(v) = raw.min_term_length {
        result.min_term_length = v;
    }
    if let Some(v) = raw.case_sensitive {
        result.case_sensitive = v;
    }
}

/// Collects notebooks, first definition of each name wins.
fn merge_notebooks(configs: &[ParsedConfig]) -> Result<Vec<Notebook>, ConfigError> {
    let mut notebooks: Vec<Notebook> = Vec::new();

    for parsed in configs {
        let Some(ref raw_notebooks) = parsed.config.notebook else {
            continue;
        };
        let config_dir = parsed
            .path
            .parent()
            .map(|p| p.to_path_buf())
            .unwrap_or_default();
        let is_global = is_global_config(&parsed.path);

        for (name, raw) in raw_notebooks {
            if notebooks.iter().any(|nb| &nb.name == name) {
                continue;
            }
            notebooks.push(Notebook {
                name: name.clone(),
                tree: resolve_notebook_path(&raw.tree, &config_dir)?,
                docs: resolve_notebook_path(&raw.docs, &config_dir)?,
                extension: raw
                    .extension
                    .as_deref()
                    .map(|e| e.trim_start_matches('.').to_string())
                    .unwrap_or_else(|| DEFAULT_EXTENSION.to_string()),
                exclude: raw.exclude.clone().unwrap_or_default(),
                is_global,
            });
        }
    }

    Ok(notebooks)
}
