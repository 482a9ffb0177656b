//! Error types for folio configuration.

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use toml::de;

/// Errors that can occur when loading or processing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to parse TOML configuration.
    #[error("failed to parse config file {path}: {source}")]
    ParseToml {
        /// Path to the file that could not be parsed.
        path: PathBuf,
        /// Underlying TOML parse error.
        source: de::Error,
    },

    /// Failed to compile a glob pattern.
    #[error("invalid glob pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The invalid pattern.
        pattern: String,
        /// Underlying glob error.
        source: globset::Error,
    },

    /// Failed to determine home directory.
    #[error("could not determine home directory")]
    NoHomeDirectory,

    /// No notebooks are configured.
    #[error("no notebooks defined in configuration")]
    NoNotebooks,

    /// A notebook name was requested that is not configured.
    #[error("unknown notebook: {name}")]
    UnknownNotebook {
        /// The requested name.
        name: String,
    },

    /// Several notebooks exist and none was selected.
    #[error("several notebooks defined ({}), select one with --notebook", names.join(", "))]
    AmbiguousNotebook {
        /// Names of the configured notebooks.
        names: Vec<String>,
    },
}
