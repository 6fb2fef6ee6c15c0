//! Scriptable [`MockStore`] for sync tests

use std::collections::{BTreeMap, HashSet};
use std::sync::Mutex;

use sync_core::{ChangedRecord, LogEntry, Result, Store};

/// Store that commits every key except those scripted to fail, assigning
/// `v1/<key>` version paths, and records each changed-set it receives.
///
/// Interior mutability keeps the recording behind `&self`, matching the
/// [`Store`] trait.
pub struct MockStore {
    fail_keys: HashSet<String>,
    calls: Mutex<Vec<Vec<String>>>,
}

impl Default for MockStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MockStore {
    /// A store where every key succeeds.
    pub fn new() -> Self {
        Self {
            fail_keys: HashSet::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// A store where the named keys fail (are omitted from the outcome map).
    pub fn failing(keys: &[&str]) -> Self {
        Self {
            fail_keys: keys.iter().map(|k| k.to_string()).collect(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Number of times `sync` was invoked.
    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("MockStore mutex poisoned").len()
    }

    /// The key sets handed to each `sync` call, in order.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().expect("MockStore mutex poisoned").clone()
    }
}

impl Store for MockStore {
    fn name(&self) -> &str {
        "mock"
    }

    fn sync(&self, changed: &[ChangedRecord]) -> Result<BTreeMap<String, LogEntry>> {
        self.calls
            .lock()
            .expect("MockStore mutex poisoned")
            .push(changed.iter().map(|record| record.key.clone()).collect());

        Ok(changed
            .iter()
            .filter(|record| !self.fail_keys.contains(&record.key))
            .map(|record| {
                (
                    record.key.clone(),
                    record.entry(format!("v1/{}", record.key)),
                )
            })
            .collect())
    }
}
