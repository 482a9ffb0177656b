//! Document identifiers.
//!
//! Every leaf of the content tree points at a markdown file by a numeric id. The id is also
//! the file stem on disk (`42.md`).

use std::{fmt, num::ParseIntError, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when parsing document IDs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The input was not a non-negative integer.
    #[error("invalid document id '{input}': {source}")]
    NotANumber {
        /// The rejected input.
        input: String,
        /// Underlying parse error.
        source: ParseIntError,
    },
}

/// Numeric identifier of a markdown document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocId(pub u64);

impl DocId {
    /// Returns the raw numeric value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DocId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|source| IdError::NotANumber {
                input: s.to_string(),
                source,
            })
    }
}

impl From<u64> for DocId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}
