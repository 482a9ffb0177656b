//! CLI integration tests for folio commands.
//!
//! These tests focus on exit codes and basic behavioral verification,
//! not specific output formatting which may change.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

/// Helper to create a temp directory for tests.
fn temp_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Helper to get a folio command.
fn folio() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("folio").unwrap()
}

/// Helper to run `folio` with HOME isolated to the provided directory.
fn folio_with_home(home: &Path) -> Command {
    let mut cmd = folio();
    cmd.env("HOME", home);
    cmd.env_remove("FOLIO_LOG");
    cmd
}

/// Content tree used by most tests.
const TREE: &str = r#"{
    "Algorithms": {
        "___urlPath___": "algorithms",
        "Sorting": { "___md___": 12, "___urlPath___": "sorting" },
        "Graphs": { "___md___": 13 }
    },
    "A": {
        "___urlPath___": "a",
        "B": { "___md___": 42 }
    }
}"#;

/// A project directory holding one notebook, plus a separate empty home directory.
struct Fixture {
    /// Project root with `.folio.toml`.
    project: TempDir,
    /// Isolated home directory.
    home: TempDir,
}

impl Fixture {
    /// Creates the notebook `algo` with notes 12, 13 and 42.
    fn new() -> Self {
        let fixture = Self {
            project: temp_dir(),
            home: temp_dir(),
        };
        fixture.write(
            ".folio.toml",
            "root = true\n\n[notebook.algo]\ntree = \"tree.json\"\ndocs = \"md\"\n",
        );
        fixture.write("tree.json", TREE);
        fixture.write(
            "md/12.md",
            "# Sorting\n\nMerge sort splits the array. Quick sort picks a pivot and sorts.\n",
        );
        fixture.write(
            "md/13.md",
            "---\ntitle: Graph Basics\ntags: [graphs]\n---\nA graph has vertices and edges.\n\nBFS uses a queue.\n",
        );
        fixture.write("md/42.md", "# B\n\nThe answer is 42.\n");
        fixture
    }

    /// Writes a file relative to the project root.
    fn write(&self, rel_path: &str, contents: &str) {
        let path = self.project.path().join(rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
    }

    /// A `folio` command running in the project with HOME isolated.
    fn cmd(&self) -> Command {
        let mut cmd = folio_with_home(self.home.path());
        cmd.current_dir(self.project.path());
        cmd
    }

    /// Runs `folio` with `args` and parses stdout as JSON.
    fn json(&self, args: &[&str]) -> Value {
        let output = self.cmd().args(args).output().unwrap();
        assert!(output.status.success(), "folio {args:?} failed: {output:?}");
        serde_json::from_slice(&output.stdout).unwrap()
    }
}

mod show {
    use super::*;

    #[test]
    fn resolves_document_route() {
        let fixture = Fixture::new();
        fixture
            .cmd()
            .args(["show", "/notes/a/B"])
            .assert()
            .success()
            .stdout(predicate::str::contains("The answer is 42."))
            .stdout(predicate::str::contains("A › B"));
    }

    #[test]
    fn unknown_segment_is_not_found() {
        let fixture = Fixture::new();
        fixture
            .cmd()
            .args(["show", "a/X"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("not found"))
            .stderr(predicate::str::contains("'X'"));
    }

    #[test]
    fn json_output_for_document() {
        let fixture = Fixture::new();
        let json = fixture.json(&["show", "a/B", "--json"]);

        assert_eq!(json["kind"], "document");
        assert_eq!(json["document"]["id"], 42);
        assert_eq!(json["href"], "/notes/a/b");
        assert_eq!(json["trail"].as_array().unwrap().len(), 2);
        assert_eq!(json["trail"][0]["title"], "A");
    }

    #[test]
    fn same_route_resolves_the_same_way_twice() {
        let fixture = Fixture::new();
        let first = fixture.json(&["show", "algorithms/Graphs", "--json"]);
        let second = fixture.json(&["show", "algorithms/graphs", "--json"]);
        assert_eq!(first["document"]["id"], 13);
        assert_eq!(first["document"]["id"], second["document"]["id"]);
        assert_eq!(first["document"]["title"], "Graph Basics");
    }

    #[test]
    fn root_lists_top_level_topics() {
        let fixture = Fixture::new();
        let json = fixture.json(&["show", "/", "--json"]);
        assert_eq!(json["kind"], "listing");
        assert_eq!(json["trail"].as_array().unwrap().len(), 0);
        let titles: Vec<_> = json["children"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["title"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(titles, vec!["Algorithms", "A"]);
    }

    #[test]
    fn raw_keeps_frontmatter() {
        let fixture = Fixture::new();
        fixture
            .cmd()
            .args(["show", "algorithms/graphs", "--raw"])
            .assert()
            .success()
            .stdout(predicate::str::contains("title: Graph Basics"));
    }

    #[test]
    fn raw_rejects_listings() {
        let fixture = Fixture::new();
        fixture
            .cmd()
            .args(["show", "algorithms", "--raw"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("topic listing"));
    }

    #[test]
    fn missing_note_fails() {
        let fixture = Fixture::new();
        fs::remove_file(fixture.project.path().join("md/42.md")).unwrap();
        fixture
            .cmd()
            .args(["show", "a/b"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("no document with id 42"));
    }

    #[test]
    fn without_config_suggests_init() {
        let home = temp_dir();
        let project = temp_dir();
        folio_with_home(home.path())
            .current_dir(project.path())
            .args(["show", "/"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("folio init"));
    }
}

mod ls {
    use super::*;

    #[test]
    fn lists_root() {
        let fixture = Fixture::new();
        fixture
            .cmd()
            .arg("ls")
            .assert()
            .success()
            .stdout(predicate::str::contains("Algorithms/"))
            .stdout(predicate::str::contains("A/"));
    }

    #[test]
    fn long_listing_shows_links() {
        let fixture = Fixture::new();
        fixture
            .cmd()
            .args(["ls", "algorithms", "-l"])
            .assert()
            .success()
            .stdout(predicate::str::contains("/notes/algorithms/sorting"))
            .stdout(predicate::str::contains("/notes/algorithms/graphs"));
    }

    #[test]
    fn recursive_json_covers_every_topic() {
        let fixture = Fixture::new();
        let json = fixture.json(&["ls", "-r", "--json"]);
        let paths: Vec<_> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["path"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(
            paths,
            vec![
                "algorithms",
                "algorithms/sorting",
                "algorithms/graphs",
                "a",
                "a/b"
            ]
        );
    }

    #[test]
    fn unknown_route_fails() {
        let fixture = Fixture::new();
        fixture.cmd().args(["ls", "nope"]).assert().failure();
    }
}

mod sidebar {
    use super::*;

    /// Returns the paths of the visible rows.
    fn row_paths(json: &Value) -> Vec<String> {
        json["rows"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["path"].as_str().unwrap().to_string())
            .collect()
    }

    #[test]
    fn collapsed_without_route() {
        let fixture = Fixture::new();
        let json = fixture.json(&["sidebar", "--json"]);
        assert_eq!(row_paths(&json), vec!["algorithms", "a"]);
        assert!(json["active"].is_null());
    }

    #[test]
    fn route_expands_its_ancestors() {
        let fixture = Fixture::new();
        let json = fixture.json(&["sidebar", "/notes/algorithms/graphs", "--json"]);

        assert_eq!(
            row_paths(&json),
            vec!["algorithms", "algorithms/sorting", "algorithms/graphs", "a"]
        );
        assert_eq!(json["active"], "algorithms/graphs");
        assert_eq!(json["expanded"], serde_json::json!(["algorithms"]));
        assert_eq!(json["rows"][2]["active"], true);
        assert_eq!(json["rows"][0]["in_trail"], true);
        assert_eq!(json["rows"][2]["href"], "/notes/algorithms/graphs");
    }

    #[test]
    fn expand_keeps_other_topics_open() {
        let fixture = Fixture::new();
        let json = fixture.json(&["sidebar", "algorithms/sorting", "--expand", "A", "--json"]);
        assert_eq!(
            row_paths(&json),
            vec![
                "algorithms",
                "algorithms/sorting",
                "algorithms/graphs",
                "a",
                "a/b"
            ]
        );
    }

    #[test]
    fn collapse_applies_after_sync() {
        let fixture = Fixture::new();
        let json = fixture.json(&[
            "sidebar",
            "algorithms/sorting",
            "--collapse",
            "algorithms",
            "--json",
        ]);
        assert_eq!(row_paths(&json), vec!["algorithms", "a"]);
    }

    #[test]
    fn text_output_marks_expansion() {
        let fixture = Fixture::new();
        fixture
            .cmd()
            .args(["sidebar", "a/b"])
            .assert()
            .success()
            .stdout(predicate::str::contains("▾ A"))
            .stdout(predicate::str::contains("▸ Algorithms"));
    }
}

mod search {
    use super::*;

    #[test]
    fn finds_matching_notes() {
        let fixture = Fixture::new();
        fixture
            .cmd()
            .args(["search", "queue"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Graph Basics"))
            .stdout(predicate::str::contains("Algorithms › Graphs"));
    }

    #[test]
    fn json_ranks_by_terms_then_occurrences() {
        let fixture = Fixture::new();
        let json = fixture.json(&["search", "sort", "pivot", "--json"]);

        assert_eq!(json["query"], "sort pivot");
        assert_eq!(json["hits"][0]["id"], 12);
        assert_eq!(json["hits"][0]["matched_terms"], 2);
        assert_eq!(json["stats"]["scanned"], 3);
    }

    #[test]
    fn limit_caps_results() {
        let fixture = Fixture::new();
        let json = fixture.json(&["search", "the", "a", "is", "-n", "1", "--json"]);
        assert_eq!(json["hits"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn no_results() {
        let fixture = Fixture::new();
        fixture
            .cmd()
            .args(["search", "zebra"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No results found."));
    }

    #[test]
    fn too_short_query_fails() {
        let fixture = Fixture::new();
        fixture
            .cmd()
            .args(["search", "a"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("no search terms"));
    }

    #[test]
    fn case_sensitive_flag() {
        let fixture = Fixture::new();
        let json = fixture.json(&["search", "bfs", "--case-sensitive", "--json"]);
        assert_eq!(json["hits"].as_array().unwrap().len(), 0);
        let json = fixture.json(&["search", "BFS", "--case-sensitive", "--json"]);
        assert_eq!(json["hits"][0]["id"], 13);
    }

    #[test]
    fn unreadable_notes_are_skipped() {
        let fixture = Fixture::new();
        fs::remove_file(fixture.project.path().join("md/13.md")).unwrap();
        let json = fixture.json(&["search", "answer", "--json"]);
        assert_eq!(json["hits"][0]["id"], 42);
        assert_eq!(json["stats"]["failed"], 1);
    }

    #[test]
    fn verbose_prints_totals() {
        let fixture = Fixture::new();
        fixture
            .cmd()
            .args(["search", "sort", "-v"])
            .assert()
            .success()
            .stdout(predicate::str::contains("3 scanned"));
    }
}

mod check {
    use super::*;

    #[test]
    fn clean_notebook_passes() {
        let fixture = Fixture::new();
        fixture
            .cmd()
            .arg("check")
            .assert()
            .success()
            .stdout(predicate::str::contains("No issues found."));
    }

    #[test]
    fn reports_orphan_files() {
        let fixture = Fixture::new();
        fixture.write("md/77.md", "# Stray\n");
        fixture
            .cmd()
            .arg("check")
            .assert()
            .failure()
            .stdout(predicate::str::contains("77.md"));
    }

    #[test]
    fn reports_missing_notes() {
        let fixture = Fixture::new();
        fs::remove_file(fixture.project.path().join("md/12.md")).unwrap();
        fixture
            .cmd()
            .arg("check")
            .assert()
            .failure()
            .stdout(predicate::str::contains("note 12 is missing"));
    }

    #[test]
    fn reports_tree_warnings() {
        let fixture = Fixture::new();
        fixture.write(
            "tree.json",
            r#"{ "A": { "___md___": 42 }, "a": { "___md___": 42 } }"#,
        );
        fixture
            .cmd()
            .arg("check")
            .assert()
            .failure()
            .stdout(predicate::str::contains("share the segment 'a'"));
    }

    #[test]
    fn invalid_tree_fails() {
        let fixture = Fixture::new();
        fixture.write("tree.json", r#"{ "A": 3 }"#);
        fixture.cmd().arg("check").assert().failure();
    }

    #[test]
    fn no_config_is_not_an_error() {
        let home = temp_dir();
        let project = temp_dir();
        folio_with_home(home.path())
            .current_dir(project.path())
            .arg("check")
            .assert()
            .success()
            .stdout(predicate::str::contains("No configuration files found."));
    }
}

mod notebooks {
    use super::*;

    /// Adds a second notebook sharing the same files.
    fn with_two_notebooks() -> Fixture {
        let fixture = Fixture::new();
        fixture.write(
            ".folio.toml",
            "root = true\n\n[notebook.algo]\ntree = \"tree.json\"\ndocs = \"md\"\n\n\
             [notebook.copy]\ntree = \"tree.json\"\ndocs = \"md\"\n",
        );
        fixture
    }

    #[test]
    fn ambiguous_without_selection() {
        let fixture = with_two_notebooks();
        fixture
            .cmd()
            .args(["show", "a/b"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("--notebook"));
    }

    #[test]
    fn selected_with_flag() {
        let fixture = with_two_notebooks();
        fixture
            .cmd()
            .args(["-b", "copy", "show", "a/b"])
            .assert()
            .success();
        fixture
            .cmd()
            .args(["show", "a/b", "--notebook", "algo"])
            .assert()
            .success();
    }

    #[test]
    fn check_limits_config_warnings_to_selected_notebook() {
        let fixture = Fixture::new();
        fixture.write(
            ".folio.toml",
            "root = true\n\n[notebook.algo]\ntree = \"tree.json\"\ndocs = \"md\"\n\n\
             [notebook.broken]\ntree = \"gone.json\"\ndocs = \"md\"\n",
        );
        fixture
            .cmd()
            .args(["-b", "algo", "check"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No issues found."))
            .stdout(predicate::str::contains("gone.json").not());
        fixture
            .cmd()
            .arg("check")
            .assert()
            .failure()
            .stdout(predicate::str::contains("notebook 'broken' tree file does not exist"));
    }

    #[test]
    fn unknown_notebook() {
        let fixture = Fixture::new();
        fixture
            .cmd()
            .args(["-b", "nope", "ls"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("unknown notebook: nope"));
    }
}

mod status {
    use super::*;

    #[test]
    fn lists_notebooks() {
        let fixture = Fixture::new();
        fixture
            .cmd()
            .arg("status")
            .assert()
            .success()
            .stdout(predicate::str::contains("Notebooks:"))
            .stdout(predicate::str::contains("algo"))
            .stdout(predicate::str::contains("5 topics, 3 notes"));
    }

    #[test]
    fn flags_missing_paths() {
        let fixture = Fixture::new();
        fs::remove_dir_all(fixture.project.path().join("md")).unwrap();
        fixture
            .cmd()
            .arg("status")
            .assert()
            .success()
            .stdout(predicate::str::contains("[missing]"));
    }
}

mod config {
    use super::*;

    #[test]
    fn prints_settings_and_notebooks() {
        let fixture = Fixture::new();
        fixture.write(
            ".folio.toml",
            "root = true\n\n[site]\nroute_prefix = \"kb\"\n\n[notebook.algo]\ntree = \"tree.json\"\ndocs = \"md\"\n",
        );
        fixture
            .cmd()
            .arg("config")
            .assert()
            .success()
            .stdout(predicate::str::contains("route_prefix = \"kb\""))
            .stdout(predicate::str::contains("[notebook.algo]"));
    }

    #[test]
    fn route_prefix_applies_to_routes() {
        let fixture = Fixture::new();
        fixture.write(
            ".folio.toml",
            "root = true\n\n[site]\nroute_prefix = \"kb\"\n\n[notebook.algo]\ntree = \"tree.json\"\ndocs = \"md\"\n",
        );
        let json = fixture.json(&["show", "/kb/a/b", "--json"]);
        assert_eq!(json["href"], "/kb/a/b");
    }
}

mod init {
    use super::*;

    #[test]
    fn creates_config_file() {
        let dir = temp_dir();
        let home = temp_dir();

        folio_with_home(home.path())
            .current_dir(dir.path())
            .arg("init")
            .assert()
            .success();

        let config_path = dir.path().join(".folio.toml");
        assert!(config_path.exists());

        let contents = fs::read_to_string(&config_path).unwrap();
        assert!(contents.contains("# [notebook."));
    }

    #[test]
    fn fails_if_config_exists() {
        let dir = temp_dir();
        fs::write(dir.path().join(".folio.toml"), "existing").unwrap();

        folio_with_home(dir.path())
            .current_dir(dir.path())
            .arg("init")
            .assert()
            .failure();
    }

    #[test]
    fn force_overwrites_existing() {
        let dir = temp_dir();
        let home = temp_dir();
        fs::write(dir.path().join(".folio.toml"), "old content").unwrap();

        folio_with_home(home.path())
            .current_dir(dir.path())
            .args(["init", "--force"])
            .assert()
            .success();

        let contents = fs::read_to_string(dir.path().join(".folio.toml")).unwrap();
        assert!(contents.contains("# [notebook."));
    }

    #[test]
    fn works_with_invalid_existing_config() {
        let dir = temp_dir();
        let home = temp_dir();
        fs::write(dir.path().join(".folio.toml"), "not = [valid").unwrap();

        folio_with_home(home.path())
            .current_dir(dir.path())
            .args(["init", "--force"])
            .assert()
            .success();
    }

    #[test]
    fn global_writes_to_home() {
        let dir = temp_dir();
        let home = temp_dir();

        folio_with_home(home.path())
            .current_dir(dir.path())
            .args(["init", "--global"])
            .assert()
            .success();

        assert!(home.path().join(".folio.toml").exists());
        assert!(!dir.path().join(".folio.toml").exists());
    }
}

#[test]
fn help_lists_commands() {
    folio()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("sidebar"))
        .stdout(predicate::str::contains("--notebook"));
}
