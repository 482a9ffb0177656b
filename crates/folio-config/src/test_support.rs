//! Scratch notebook directories for folio-config unit tests.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

use crate::discovery::CONFIG_FILENAME;

/// A throwaway directory tree that config files and notebooks are laid out in.
pub struct TestDir {
    /// Backing temporary directory.
    root: TempDir,
}

impl TestDir {
    /// Creates an empty scratch directory.
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
        }
    }

    /// Returns the scratch root.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Makes `rel` and any missing parents, returning the absolute path.
    pub fn create_dir(&self, rel: &str) -> PathBuf {
        let dir = self.path().join(rel);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// Writes an empty content tree (`{}`) at `rel`.
    pub fn create_file(&self, rel: &str) -> PathBuf {
        self.write(rel, "{}")
    }

    /// Writes a placeholder `.folio.toml` inside `rel`; an empty `rel` means the scratch root.
    pub fn create_config(&self, rel: &str) -> PathBuf {
        self.create_config_with_content(rel, "# placeholder\n")
    }

    /// Writes a `.folio.toml` with `content` inside `rel`.
    pub fn create_config_with_content(&self, rel: &str, content: &str) -> PathBuf {
        self.write(&Path::new(rel).join(CONFIG_FILENAME).to_string_lossy(), content)
    }

    /// Writes a `.folio.toml` that stops discovery inside `rel`.
    pub fn create_root_config(&self, rel: &str) -> PathBuf {
        self.create_config_with_content(rel, "root = true\n")
    }

    /// Writes `content` at `rel`, creating parent directories.
    fn write(&self, rel: &str, content: &str) -> PathBuf {
        let file = self.path().join(rel);
        if let Some(parent) = file.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&file, content).unwrap();
        file
    }
}
