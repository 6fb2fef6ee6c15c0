//! [`TestTree`] builder for sync test scenarios

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use sync_fs::FileRecord;

/// A temporary directory with an entry tree and helper methods for test
/// setup and assertion.
///
/// The layout is `<root>/tree` for source files, with the root itself used
/// as the working directory for log files and destinations, so a default
/// `sync.json` lands next to, not inside, the scanned tree.
///
/// # Example
///
/// ```rust,no_run
/// use sync_test_utils::TestTree;
///
/// let tree = TestTree::new();
/// tree.write_file("docs/a.md", b"hello");
/// tree.assert_file_exists("tree/docs/a.md");
/// ```
pub struct TestTree {
    temp_dir: TempDir,
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTree {
    /// Create an empty temporary directory with an empty `tree/` entry.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("TestTree::new: failed to create temp dir");
        fs::create_dir_all(temp_dir.path().join("tree"))
            .expect("TestTree::new: failed to create entry dir");
        Self { temp_dir }
    }

    /// Working-directory root of the fixture.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// The entry directory scanned by sync runs.
    pub fn entry(&self) -> PathBuf {
        self.temp_dir.path().join("tree")
    }

    /// Default log file path for runs rooted here.
    pub fn log_path(&self) -> PathBuf {
        self.temp_dir.path().join("sync.json")
    }

    /// Write a file under the entry tree, creating parent directories.
    pub fn write_file(&self, key: &str, content: &[u8]) -> PathBuf {
        let path = self.entry().join(key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("TestTree::write_file: failed to create parents");
        }
        fs::write(&path, content).expect("TestTree::write_file: failed to write");
        path
    }

    /// Remove a file from the entry tree.
    pub fn remove_file(&self, key: &str) {
        fs::remove_file(self.entry().join(key)).expect("TestTree::remove_file: failed to remove");
    }

    /// Read a file back from anywhere under the fixture root.
    pub fn read_file(&self, relative: &str) -> Vec<u8> {
        fs::read(self.root().join(relative)).expect("TestTree::read_file: failed to read")
    }

    /// Build the [`FileRecord`] the listing would produce for a key.
    pub fn record(&self, key: &str) -> FileRecord {
        let path = self.entry().join(key);
        let fp = sync_fs::fingerprint(&path).expect("TestTree::record: failed to fingerprint");
        FileRecord {
            key: key.to_string(),
            path,
            size: fp.size,
            mtime: fp.mtime,
        }
    }

    /// Assert that a path exists under the fixture root.
    pub fn assert_file_exists(&self, relative: &str) {
        assert!(
            self.root().join(relative).exists(),
            "expected file to exist: {relative}"
        );
    }

    /// Assert that a path does not exist under the fixture root.
    pub fn assert_file_missing(&self, relative: &str) {
        assert!(
            !self.root().join(relative).exists(),
            "expected file to be missing: {relative}"
        );
    }
}
