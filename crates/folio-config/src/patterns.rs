//! Exclude pattern compilation and matching.

use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::ConfigError;

/// Compiled exclude patterns for a notebook's document directory.
#[derive(Debug, Clone)]
pub struct ExcludePatterns {
    /// The compiled set.
    set: GlobSet,
}

impl ExcludePatterns {
    /// Compiles the given glob patterns.
    pub fn compile(patterns: &[String]) -> Result<Self, ConfigError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            builder.add(compile_glob(pattern)?);
        }
        let set = builder.build().map_err(|source| ConfigError::InvalidPattern {
            pattern: patterns.join(", "),
            source,
        })?;
        Ok(Self { set })
    }

    /// Returns true if the path (relative to the docs directory) is excluded.
    pub fn is_excluded(&self, path: &Path) -> bool {
        self.set.is_match(path)
    }
}

/// Compiles a single glob pattern.
fn compile_glob(pattern: &str) -> Result<Glob, ConfigError> {
    Glob::new(pattern).map_err(|source| ConfigError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}
