//! Saving and loading elections through an [`ElectionStore`].
//!
//! Snapshots are stored bincode-encoded; the integrity hash travels
//! inside the encoded snapshot and is verified on load.

use ballot_store::ElectionStore;

use crate::snapshot::ElectionSnapshot;
use crate::{Election, SnapshotError};

pub fn encode(snapshot: &ElectionSnapshot) -> Result<Vec<u8>, SnapshotError> {
    Ok(bincode::serialize(snapshot)?)
}

pub fn decode(bytes: &[u8]) -> Result<ElectionSnapshot, SnapshotError> {
    Ok(bincode::deserialize(bytes)?)
}

/// Persist the current state of `election` under `key`.
pub fn save(
    store: &dyn ElectionStore,
    key: &str,
    election: &Election,
) -> Result<(), SnapshotError> {
    let snapshot = election.snapshot();
    store.put_snapshot(key, &encode(&snapshot)?)?;
    tracing::debug!(key, hash = %snapshot.hash, "election saved");
    Ok(())
}

/// Load and verify the election stored under `key`.
pub fn load(store: &dyn ElectionStore, key: &str) -> Result<Election, SnapshotError> {
    let bytes = store.get_snapshot(key)?;
    Election::restore(decode(&bytes)?)
}
