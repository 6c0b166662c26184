//! Saving and loading elections through the nullable store.

use ballot_election::{persist, AccountId, Election, SnapshotError, WorkflowStatus};
use ballot_nullables::NullElectionStore;
use ballot_store::{ElectionStore, StoreError};

fn owner() -> AccountId {
    AccountId::new("owner")
}

fn mid_vote() -> Election {
    let mut election = Election::new(owner());
    for v in ["alice", "bob"] {
        election.add_voter(&owner(), AccountId::new(v)).unwrap();
    }
    election.start_proposals_registering(&owner()).unwrap();
    election
        .add_proposal(&AccountId::new("alice"), "bike lanes")
        .unwrap();
    election.end_proposals_registering(&owner()).unwrap();
    election.start_voting_session(&owner()).unwrap();
    election.set_vote(&AccountId::new("alice"), 1).unwrap();
    election
}

#[test]
fn saved_election_loads_and_continues() {
    let store = NullElectionStore::new();
    persist::save(&store, "city", &mid_vote()).unwrap();

    let mut loaded = persist::load(&store, "city").unwrap();
    assert_eq!(loaded.workflow_status(), WorkflowStatus::VotingSessionStarted);
    assert!(loaded
        .set_vote(&AccountId::new("alice"), 1)
        .is_err());
    loaded.set_vote(&AccountId::new("bob"), 0).unwrap();
    loaded.end_voting_session(&owner()).unwrap();
    loaded.tally_votes(&owner()).unwrap();
    assert_eq!(loaded.winning_proposal_id(), 0, "blank vote ties, lowest index wins");
}

#[test]
fn loaded_snapshot_matches_saved_one() {
    let store = NullElectionStore::new();
    let election = mid_vote();
    persist::save(&store, "city", &election).unwrap();
    assert_eq!(persist::load(&store, "city").unwrap().snapshot(), election.snapshot());
}

#[test]
fn missing_election_is_not_found() {
    let store = NullElectionStore::new();
    assert!(matches!(
        persist::load(&store, "nowhere"),
        Err(SnapshotError::Store(StoreError::NotFound(_)))
    ));
}

#[test]
fn garbage_bytes_fail_to_decode() {
    let store = NullElectionStore::new();
    store.tamper("city", vec![0xff; 7]);
    assert!(matches!(
        persist::load(&store, "city"),
        Err(SnapshotError::Encoding(_))
    ));
}

#[test]
fn edited_snapshot_fails_integrity_check() {
    let store = NullElectionStore::new();
    let mut snapshot = mid_vote().snapshot();
    snapshot.proposals[1].vote_count = 2;
    store.tamper("city", persist::encode(&snapshot).unwrap());
    assert!(matches!(
        persist::load(&store, "city"),
        Err(SnapshotError::IntegrityMismatch { .. })
    ));
}

#[test]
fn failed_save_keeps_previous_snapshot() {
    let store = NullElectionStore::new();
    let mut election = mid_vote();
    persist::save(&store, "city", &election).unwrap();

    election.set_vote(&AccountId::new("bob"), 1).unwrap();
    store.fail_writes(true);
    assert!(matches!(
        persist::save(&store, "city", &election),
        Err(SnapshotError::Store(StoreError::Backend(_)))
    ));

    let loaded = persist::load(&store, "city").unwrap();
    assert_eq!(loaded.voters().turnout(), 1);
    assert!(store.contains("city").unwrap());
}
