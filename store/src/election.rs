//! Election snapshot storage trait.

use crate::StoreError;

/// Durable, atomic storage for encoded election snapshots.
///
/// Each deployed election is stored under its own key. A `put_snapshot`
/// must replace the previous snapshot for that key atomically: readers
/// see either the old bytes or the new bytes, never a mix.
pub trait ElectionStore {
    /// Store (or replace) the snapshot for an election.
    fn put_snapshot(&self, election: &str, data: &[u8]) -> Result<(), StoreError>;

    /// Get the latest snapshot for an election.
    ///
    /// Returns [`StoreError::NotFound`] if nothing was stored under the key.
    fn get_snapshot(&self, election: &str) -> Result<Vec<u8>, StoreError>;

    /// Remove the snapshot for an election. Returns whether one existed.
    fn delete_snapshot(&self, election: &str) -> Result<bool, StoreError>;

    /// Whether a snapshot exists for an election.
    fn contains(&self, election: &str) -> Result<bool, StoreError> {
        match self.get_snapshot(election) {
            Ok(_) => Ok(true),
            Err(StoreError::NotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }
}
