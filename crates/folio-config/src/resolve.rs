//! Path resolution for notebook definitions.
//!
//! Resolves relative and tilde-prefixed paths to absolute paths, and formats paths
//! for display relative to a base directory.

use std::path::{Component, Path, PathBuf};

use directories::BaseDirs;

use crate::ConfigError;

/// Resolves a notebook path to an absolute path.
///
/// Handles three cases:
/// - Tilde paths (`~/notes`) - expanded to home directory
/// - Relative paths (`./notes`, `../shared`) - resolved relative to `config_dir`
/// - Absolute paths - returned as-is
///
/// Existing paths are canonicalized. Missing paths are kept (without `.` components) so that
/// validation can report them instead of failing the whole load.
pub fn resolve_notebook_path(path: &str, config_dir: &Path) -> Result<PathBuf, ConfigError> {
    let expanded = expand_tilde(path)?;

    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        config_dir.join(&expanded)
    };

    match absolute.canonicalize() {
        Ok(canonical) => Ok(canonical),
        Err(_) => Ok(absolute
            .components()
            .filter(|c| !matches!(c, Component::CurDir))
            .collect()),
    }
}

/// Formats a path for display, relative to `base` when that is shorter.
pub fn format_path_for_display(path: &Path, base: Option<&Path>) -> String {
    if let Some(base) = base
        && let Some(relative) = pathdiff::diff_paths(path, base)
        && !relative.starts_with("../..")
    {
        let shown = relative.display().to_string();
        if shown.is_empty() {
            return ".".to_string();
        }
        return shown;
    }
    path.display().to_string()
}

/// Expands a tilde prefix to the home directory.
fn expand_tilde(path: &str) -> Result<PathBuf, ConfigError> {
    if path == "~" {
        return home_dir();
    }

    if let Some(rest) = path.strip_prefix("~/") {
        let home = home_dir()?;
        return Ok(home.join(rest));
    }

    Ok(PathBuf::from(path))
}

/// Returns the home directory.
fn home_dir() -> Result<PathBuf, ConfigError> {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or(ConfigError::NoHomeDirectory)
}
