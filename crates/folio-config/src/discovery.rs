//! Finding the `.folio.toml` files that define a project's notebooks.
//!
//! A notes project usually keeps one `.folio.toml` beside its content tree, but a
//! subdirectory may add notebooks of its own and the home directory may hold notebooks
//! that are available everywhere. All of them are collected, nearest first.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::parse::is_root_config;

/// Name of the file that declares notebooks and site settings.
pub const CONFIG_FILENAME: &str = ".folio.toml";

/// Collects the config files that apply when running in `cwd`.
///
/// Files come nearest first, so a notebook or setting declared close to `cwd` shadows one
/// declared further up. The home file (`~/.folio.toml`) comes last. A file with
/// `root = true` marks the top of a notes project: nothing above it is read, the home
/// file included.
pub fn discover_config_files(cwd: &Path) -> Vec<PathBuf> {
    let mut configs = Vec::new();

    for dir in cwd.ancestors() {
        let candidate = dir.join(CONFIG_FILENAME);
        if !candidate.is_file() {
            continue;
        }
        let stops_here = is_root_config(&candidate);
        configs.push(candidate);
        if stops_here {
            return configs;
        }
    }

    if let Some(home_config) = global_config_path()
        && home_config.is_file()
        && !configs.contains(&home_config)
    {
        configs.push(home_config);
    }
    configs
}

/// Returns where the notebooks shared across projects are declared (`~/.folio.toml`).
///
/// `None` when there is no home directory to look in.
pub fn global_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(CONFIG_FILENAME))
}

/// Returns true if `path` is the home config, whose notebooks are marked global.
pub fn is_global_config(path: &Path) -> bool {
    global_config_path().is_some_and(|global| path == global)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TestDir;

    /// Drops the global config, which depends on the machine running the tests.
    fn local_only(configs: &[PathBuf]) -> Vec<&PathBuf> {
        configs.iter().filter(|p| !is_global_config(p)).collect()
    }

    #[test]
    fn test_discover_no_configs() {
        let test_dir = TestDir::new();
        let subdir = test_dir.create_dir("a/b/c");

        let configs = discover_config_files(&subdir);
        assert!(local_only(&configs).is_empty());
    }

    #[test]
    fn test_discover_multiple_configs_precedence_order() {
        let test_dir = TestDir::new();
        let root_config = test_dir.create_config("");
        let mid_config = test_dir.create_config("a/b");
        let leaf_config = test_dir.create_config("a/b/c/d");
        let working_dir = test_dir.create_dir("a/b/c/d/e");

        let configs = discover_config_files(&working_dir);
        let local = local_only(&configs);

        assert_eq!(local, vec![&leaf_config, &mid_config, &root_config]);
    }

    #[test]
    fn test_discover_stops_at_root_config() {
        let test_dir = TestDir::new();
        test_dir.create_config("");
        let root = test_dir.create_root_config("project");
        let working_dir = test_dir.create_dir("project/notes");

        let configs = discover_config_files(&working_dir);
        assert_eq!(configs, vec![root]);
    }

    #[test]
    fn test_global_config_path_has_filename() {
        let path = global_config_path();
        assert!(path.is_some_and(|p| p.ends_with(CONFIG_FILENAME)));
    }

    #[test]
    fn test_is_global_config() {
        let global = global_config_path().unwrap();
        assert!(is_global_config(&global));
        assert!(!is_global_config(Path::new("/some/other/path/.folio.toml")));
    }
}
