//! CLI smoke tests for the syncman binary

use assert_cmd::Command;
use predicates::prelude::*;
use sync_test_utils::TestTree;

fn syncman() -> Command {
    Command::cargo_bin("syncman").expect("syncman binary should be built")
}

#[test]
fn sync_requires_a_destination() {
    let tree = TestTree::new();
    tree.write_file("a.txt", b"alpha");

    syncman()
        .current_dir(tree.root())
        .args(["sync", "tree", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No destination configured"));
}

#[test]
fn sync_copies_changed_files_and_writes_log() {
    let tree = TestTree::new();
    tree.write_file("a.txt", b"alpha");
    tree.write_file("sub/b.txt", b"bravo");

    syncman()
        .current_dir(tree.root())
        .args(["sync", "tree", "--dest", "dest", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 file(s) to be synced"))
        .stdout(predicate::str::contains("Synced 2 file(s)."));

    tree.assert_file_exists("dest/a.txt");
    tree.assert_file_exists("dest/sub/b.txt");
    tree.assert_file_exists("sync.json");
}

#[test]
fn second_sync_reports_nothing_to_do() {
    let tree = TestTree::new();
    tree.write_file("a.txt", b"alpha");

    syncman()
        .current_dir(tree.root())
        .args(["sync", "tree", "--dest", "dest", "--yes"])
        .assert()
        .success();

    syncman()
        .current_dir(tree.root())
        .args(["sync", "tree", "--dest", "dest", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("There are no files to sync yet!"));
}

#[test]
fn status_previews_without_side_effects() {
    let tree = TestTree::new();
    tree.write_file("a.txt", b"alpha");

    syncman()
        .current_dir(tree.root())
        .args(["status", "tree"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 file(s) to be synced"));

    tree.assert_file_missing("sync.json");
    tree.assert_file_missing("dest");
}

#[test]
fn declined_prompt_syncs_nothing() {
    let tree = TestTree::new();
    tree.write_file("a.txt", b"alpha");

    syncman()
        .current_dir(tree.root())
        .args(["sync", "tree", "--dest", "dest"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No"));

    tree.assert_file_missing("dest/a.txt");
    tree.assert_file_missing("sync.json");
}

#[test]
fn config_file_supplies_defaults() {
    let tree = TestTree::new();
    tree.write_file("notes.md", b"md");
    tree.write_file("data.bin", b"bin");
    std::fs::write(
        tree.root().join("sync.toml"),
        "entry = \"tree\"\ndest = \"dest\"\next = [\"md\"]\nconfirm = false\n",
    )
    .unwrap();

    syncman()
        .current_dir(tree.root())
        .arg("sync")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 file(s) to be synced"));

    tree.assert_file_exists("dest/notes.md");
    tree.assert_file_missing("dest/data.bin");
}

#[test]
fn log_command_summarizes_the_log() {
    let tree = TestTree::new();
    tree.write_file("a.txt", b"alpha");

    syncman()
        .current_dir(tree.root())
        .args(["sync", "tree", "--dest", "dest", "--yes"])
        .assert()
        .success();

    syncman()
        .current_dir(tree.root())
        .args(["log", "--entries"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 entry in log"))
        .stdout(predicate::str::contains("a.txt"));
}

#[test]
fn malformed_log_fails_loudly() {
    let tree = TestTree::new();
    tree.write_file("a.txt", b"alpha");
    std::fs::write(tree.log_path(), "{oops").unwrap();

    syncman()
        .current_dir(tree.root())
        .args(["sync", "tree", "--dest", "dest", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed sync log"));
}
