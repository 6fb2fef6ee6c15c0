//! End-to-end engine scenarios
//!
//! Exercises the complete flow on real temp trees: listing -> detection ->
//! store -> log merge -> persistence, including the partial-success and
//! declined-confirmation paths.

use pretty_assertions::assert_eq;
use std::collections::BTreeMap;
use std::fs;

use sync_core::{
    ChangedRecord, ConfirmGate, LocalStore, LogEntry, SyncEngine, SyncLog, SyncOptions,
};
use sync_fs::ListingOptions;
use sync_test_utils::{MockStore, TestTree};

fn options(tree: &TestTree) -> SyncOptions {
    SyncOptions::new(tree.entry()).with_cwd(tree.root())
}

#[test]
fn sync_twice_is_idempotent() {
    let tree = TestTree::new();
    tree.write_file("a.txt", b"alpha");
    tree.write_file("docs/b.md", b"bravo");

    let store = MockStore::new();
    let first = SyncEngine::new(options(&tree), &store).run().unwrap();
    assert_eq!(first.changed.len(), 2);

    let second = SyncEngine::new(options(&tree), &store).run().unwrap();
    assert!(second.changed.is_empty());
    // The store is only consulted when something changed.
    assert_eq!(store.call_count(), 1);
}

#[test]
fn content_change_is_detected_and_merged() {
    let tree = TestTree::new();
    tree.write_file("a.txt", b"0123456789");

    let store = MockStore::new();
    SyncEngine::new(options(&tree), &store).run().unwrap();

    let before = SyncLog::load(&tree.log_path()).unwrap();
    let old_hash = before.entry("a.txt").unwrap().hash.clone();

    tree.write_file("a.txt", b"9876543210");
    let outcome = SyncEngine::new(options(&tree), &store).run().unwrap();

    assert_eq!(outcome.changed.len(), 1);
    assert_eq!(outcome.changed[0].key, "a.txt");
    assert_ne!(outcome.changed[0].hash, old_hash);

    let after = SyncLog::load(&tree.log_path()).unwrap();
    assert_eq!(after.entry("a.txt").unwrap().hash, outcome.changed[0].hash);
    assert_eq!(
        after.entry("a.txt").unwrap().ver_path.as_deref(),
        Some("v1/a.txt")
    );
}

#[test]
fn unchanged_file_with_matching_log_entry_stays_out_of_changed_set() {
    let tree = TestTree::new();
    tree.write_file("a.txt", b"0123456789");
    let record = tree.record("a.txt");

    // Seed the log with the file's exact current fingerprint.
    let mut log = SyncLog::new();
    log.files.insert(
        "a.txt".to_string(),
        LogEntry {
            size: record.size,
            mtime: record.mtime,
            hash: sync_fs::hash_file(&record.path).unwrap(),
            ver_path: Some("v1/a.txt".to_string()),
        },
    );
    log.last_sync = Some(100);
    log.save(&tree.log_path()).unwrap();

    let store = MockStore::new();
    let outcome = SyncEngine::new(options(&tree), &store).run().unwrap();
    assert!(outcome.changed.is_empty());
    assert_eq!(store.call_count(), 0);
}

#[test]
fn partial_store_failure_retries_only_failed_keys() {
    let tree = TestTree::new();
    tree.write_file("b.txt", b"bee");
    tree.write_file("c.txt", b"sea");

    let store = MockStore::failing(&["b.txt"]);
    let outcome = SyncEngine::new(options(&tree), &store).run().unwrap();
    assert_eq!(outcome.changed.len(), 2);

    let log = SyncLog::load(&tree.log_path()).unwrap();
    assert!(log.entry("c.txt").is_some());
    assert!(log.entry("b.txt").is_none());

    let store = MockStore::new();
    let outcome = SyncEngine::new(options(&tree), &store).run().unwrap();
    let keys: Vec<_> = outcome.changed.iter().map(|c| c.key.as_str()).collect();
    assert_eq!(keys, vec!["b.txt"]);
    assert_eq!(store.calls(), vec![vec!["b.txt".to_string()]]);
}

#[test]
fn declined_confirmation_leaves_disk_untouched() {
    struct Decline;
    impl ConfirmGate for Decline {
        fn confirm(&self, _changed: &[ChangedRecord]) -> sync_core::Result<bool> {
            Ok(false)
        }
    }

    let tree = TestTree::new();
    tree.write_file("a.txt", b"alpha");

    let store = MockStore::new();
    let gate = Decline;
    let outcome = SyncEngine::new(options(&tree), &store)
        .with_gate(&gate)
        .run()
        .unwrap();

    assert!(!outcome.confirmed);
    assert_eq!(store.call_count(), 0);
    tree.assert_file_missing("sync.json");
}

#[test]
fn log_round_trips_through_disk() {
    let tree = TestTree::new();
    tree.write_file("a.txt", b"alpha");
    tree.write_file("sub/b.txt", b"bravo");

    let store = MockStore::new();
    let outcome = SyncEngine::new(options(&tree), &store).run().unwrap();

    let loaded = SyncLog::load(&tree.log_path()).unwrap();
    assert_eq!(loaded, outcome.log);

    // Re-saving the loaded log yields a semantically equal document.
    let copy_path = tree.root().join("copy.json");
    loaded.save(&copy_path).unwrap();
    assert_eq!(SyncLog::load(&copy_path).unwrap(), loaded);
}

#[test]
fn log_document_shape_matches_the_wire_format() {
    let tree = TestTree::new();
    tree.write_file("a.txt", b"alpha");

    let store = MockStore::new();
    SyncEngine::new(options(&tree), &store).run().unwrap();

    let value: serde_json::Value =
        serde_json::from_slice(&tree.read_file("sync.json")).unwrap();
    let entry = &value["files"]["a.txt"];
    assert_eq!(entry["size"], 5);
    assert!(entry["mtime"].is_i64());
    assert!(entry["hash"].as_str().unwrap().starts_with("sha256:"));
    assert_eq!(entry["verPath"], "v1/a.txt");
    assert!(value["lastSync"].is_i64());
}

#[test]
fn listing_filters_flow_through_the_engine() {
    let tree = TestTree::new();
    tree.write_file("notes.md", b"md");
    tree.write_file("data.bin", b"bin");
    tree.write_file("drafts/skip.md", b"skip");

    let listing = ListingOptions::default()
        .with_extensions(vec!["md".to_string()])
        .with_exclude(vec!["drafts/**".to_string()]);
    let store = MockStore::new();
    let outcome = SyncEngine::new(options(&tree).with_listing(listing), &store)
        .run()
        .unwrap();

    let keys: Vec<_> = outcome.changed.iter().map(|c| c.key.as_str()).collect();
    assert_eq!(keys, vec!["notes.md"]);
}

#[test]
fn local_store_copies_into_destination_tree() {
    let tree = TestTree::new();
    tree.write_file("a.txt", b"alpha");
    tree.write_file("sub/b.txt", b"bravo");

    let store = LocalStore::new(tree.root().join("dest"));
    SyncEngine::new(options(&tree), &store).run().unwrap();

    assert_eq!(tree.read_file("dest/a.txt"), b"alpha");
    assert_eq!(tree.read_file("dest/sub/b.txt"), b"bravo");

    let log = SyncLog::load(&tree.log_path()).unwrap();
    assert_eq!(log.entry("sub/b.txt").unwrap().ver_path.as_deref(), Some("sub/b.txt"));
}

#[test]
fn deleted_files_are_not_detected_or_pruned() {
    let tree = TestTree::new();
    tree.write_file("a.txt", b"alpha");
    tree.write_file("b.txt", b"bravo");

    let store = MockStore::new();
    SyncEngine::new(options(&tree), &store).run().unwrap();

    tree.remove_file("b.txt");
    let outcome = SyncEngine::new(options(&tree), &store).run().unwrap();

    // Deletions are out of scope: nothing to sync, entry stays in the log.
    assert!(outcome.changed.is_empty());
    assert!(outcome.log.entry("b.txt").is_some());
}

#[test]
fn corrupt_log_aborts_instead_of_resyncing_everything() {
    let tree = TestTree::new();
    tree.write_file("a.txt", b"alpha");
    fs::write(tree.log_path(), "]{[").unwrap();

    let store = MockStore::new();
    let result = SyncEngine::new(options(&tree), &store).run();
    assert!(result.is_err());
    assert_eq!(store.call_count(), 0);
}

#[test]
fn wholesale_store_failure_aborts_without_log_write() {
    struct BrokenStore;
    impl sync_core::Store for BrokenStore {
        fn name(&self) -> &str {
            "broken"
        }
        fn sync(
            &self,
            _changed: &[ChangedRecord],
        ) -> sync_core::Result<BTreeMap<String, LogEntry>> {
            Err(sync_core::Error::store("broken", "connection refused"))
        }
    }

    let tree = TestTree::new();
    tree.write_file("a.txt", b"alpha");

    let result = SyncEngine::new(options(&tree), &BrokenStore).run();
    assert!(result.is_err());
    tree.assert_file_missing("sync.json");
}
