//! Configuration validation.
//!
//! Validates a loaded configuration and reports warnings for potential issues.

use std::{fmt, slice};

use crate::{Config, ExcludePatterns, Notebook};

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// No notebooks are defined.
    NoNotebooksDefined,
    /// A notebook's content tree file does not exist.
    TreeFileMissing {
        /// Name of the notebook.
        notebook: String,
        /// Path that doesn't exist.
        path: String,
    },
    /// A notebook's docs path does not exist.
    DocsPathMissing {
        /// Name of the notebook.
        notebook: String,
        /// Path that doesn't exist.
        path: String,
    },
    /// A notebook's docs path exists but is not a directory.
    DocsPathNotDirectory {
        /// Name of the notebook.
        notebook: String,
        /// Path that is not a directory.
        path: String,
    },
    /// An exclude pattern does not compile.
    InvalidExcludePattern {
        /// Name of the notebook.
        notebook: String,
        /// The offending pattern.
        pattern: String,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoNotebooksDefined => write!(f, "no notebooks are defined in configuration"),
            Self::TreeFileMissing { notebook, path } => {
                write!(f, "notebook '{notebook}' tree file does not exist: {path}")
            }
            Self::DocsPathMissing { notebook, path } => {
                write!(f, "notebook '{notebook}' docs path does not exist: {path}")
            }
            Self::DocsPathNotDirectory { notebook, path } => {
                write!(f, "notebook '{notebook}' docs path is not a directory: {path}")
            }
            Self::InvalidExcludePattern { notebook, pattern } => {
                write!(f, "notebook '{notebook}' has invalid exclude pattern '{pattern}'")
            }
        }
    }
}

impl ConfigWarning {
    /// Returns the notebook the warning is about, or `None` for configuration-wide warnings.
    pub fn notebook(&self) -> Option<&str> {
        match self {
            Self::NoNotebooksDefined => None,
            Self::TreeFileMissing { notebook, .. }
            | Self::DocsPathMissing { notebook, .. }
            | Self::DocsPathNotDirectory { notebook, .. }
            | Self::InvalidExcludePattern { notebook, .. } => Some(notebook),
        }
    }
}

/// Validates the configuration and returns any warnings.
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    if config.notebooks.is_empty() {
        return vec![ConfigWarning::NoNotebooksDefined];
    }

    config.notebooks.iter().flat_map(validate_notebook).collect()
}

/// Validates a single notebook.
fn validate_notebook(notebook: &Notebook) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    if !notebook.tree.is_file() {
        warnings.push(ConfigWarning::TreeFileMissing {
            notebook: notebook.name.clone(),
            path: notebook.tree.display().to_string(),
        });
    }

    if !notebook.docs.exists() {
        warnings.push(ConfigWarning::DocsPathMissing {
            notebook: notebook.name.clone(),
            path: notebook.docs.display().to_string(),
        });
    } else if !notebook.docs.is_dir() {
        warnings.push(ConfigWarning::DocsPathNotDirectory {
            notebook: notebook.name.clone(),
            path: notebook.docs.display().to_string(),
        });
    }

    for pattern in &notebook.exclude {
        if ExcludePatterns::compile(slice::from_ref(pattern)).is_err() {
            warnings.push(ConfigWarning::InvalidExcludePattern {
                notebook: notebook.name.clone(),
                pattern: pattern.clone(),
            });
        }
    }

    warnings
}
