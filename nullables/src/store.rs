//! Nullable store: thread-safe in-memory snapshot storage for testing.

use ballot_store::{ElectionStore, StoreError};
use std::collections::HashMap;
use std::sync::Mutex;

/// An in-memory [`ElectionStore`].
///
/// Writes can be made to fail with [`NullElectionStore::fail_writes`] to
/// exercise error paths in callers.
pub struct NullElectionStore {
    snapshots: Mutex<HashMap<String, Vec<u8>>>,
    fail_writes: Mutex<bool>,
}

impl NullElectionStore {
    pub fn new() -> Self {
        Self {
            snapshots: Mutex::new(HashMap::new()),
            fail_writes: Mutex::new(false),
        }
    }

    /// Make every subsequent `put_snapshot` fail with a backend error.
    pub fn fail_writes(&self, fail: bool) {
        *self.fail_writes.lock().unwrap() = fail;
    }

    /// Overwrite stored bytes directly, bypassing any encoding.
    pub fn tamper(&self, election: &str, data: Vec<u8>) {
        self.snapshots
            .lock()
            .unwrap()
            .insert(election.to_string(), data);
    }

    /// Number of stored snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for NullElectionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ElectionStore for NullElectionStore {
    fn put_snapshot(&self, election: &str, data: &[u8]) -> Result<(), StoreError> {
        if *self.fail_writes.lock().unwrap() {
            return Err(StoreError::Backend("writes disabled".into()));
        }
        self.snapshots
            .lock()
            .unwrap()
            .insert(election.to_string(), data.to_vec());
        Ok(())
    }

    fn get_snapshot(&self, election: &str) -> Result<Vec<u8>, StoreError> {
        self.snapshots
            .lock()
            .unwrap()
            .get(election)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(election.to_string()))
    }

    fn delete_snapshot(&self, election: &str) -> Result<bool, StoreError> {
        Ok(self.snapshots.lock().unwrap().remove(election).is_some())
    }
}
