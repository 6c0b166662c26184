//! End-to-end election scenarios driven only through the public API:
//! registration → proposals → voting → tally, plus the rejection paths
//! callers rely on.

use ballot_election::{
    AccountId, Election, ElectionConfig, ElectionError, ElectionEvent, Transition, WorkflowStatus,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn owner() -> AccountId {
    AccountId::new("owner")
}

fn user(i: usize) -> AccountId {
    AccountId::new(format!("user{i}"))
}

fn election_with_voters(n: usize) -> Election {
    let config = ElectionConfig::new(owner()).with_voters((1..=n).map(user));
    Election::from_config(&config).expect("distinct voters")
}

/// `n` voters, each submitting one proposal, voting open.
fn voting_open(n: usize) -> Election {
    let mut election = election_with_voters(n);
    election.start_proposals_registering(&owner()).unwrap();
    for i in 1..=n {
        election
            .add_proposal(&user(i), format!("Revolution-{i}"))
            .unwrap();
    }
    election.end_proposals_registering(&owner()).unwrap();
    election.start_voting_session(&owner()).unwrap();
    election
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn proposal_before_registration_opens_is_invalid_phase() {
    let mut election = election_with_voters(2);
    assert_eq!(
        election.add_proposal(&user(1), "This is a revolution"),
        Err(ElectionError::InvalidPhase {
            required: WorkflowStatus::ProposalsRegistrationStarted,
            current: WorkflowStatus::RegisteringVoters,
        })
    );
    assert_eq!(election.proposal_count(), 0);
}

#[test]
fn full_election_elects_majority_proposal() {
    let mut election = election_with_voters(3);
    election.start_proposals_registering(&owner()).unwrap();
    for i in 1..=3 {
        election.add_proposal(&user(i), format!("p{i}")).unwrap();
    }
    election.end_proposals_registering(&owner()).unwrap();
    election.start_voting_session(&owner()).unwrap();
    election.set_vote(&user(1), 1).unwrap();
    election.set_vote(&user(2), 1).unwrap();
    election.set_vote(&user(3), 2).unwrap();
    election.end_voting_session(&owner()).unwrap();
    assert_eq!(election.winning_proposal_id(), 0);

    election.tally_votes(&owner()).unwrap();
    assert_eq!(election.winning_proposal_id(), 1);
    assert_eq!(election.workflow_status(), WorkflowStatus::VotesTallied);
}

#[test]
fn unregistered_caller_cannot_read_voters() {
    let election = election_with_voters(3);
    assert_eq!(
        election.get_voter(&user(4), &user(1)),
        Err(ElectionError::NotAVoter(user(4)))
    );
}

#[test]
fn vote_one_past_the_end_is_a_bounds_fault() {
    let mut election = voting_open(4);
    let count = election.proposal_count();
    assert_eq!(
        election.set_vote(&user(4), count),
        Err(ElectionError::IndexOutOfRange {
            index: count,
            len: count
        })
    );
    assert_eq!(
        election.set_vote(&user(4), 99),
        Err(ElectionError::ProposalNotFound(99))
    );
    assert!(!election.get_voter(&user(1), &user(4)).unwrap().has_voted);
    assert_eq!(election.proposals().total_votes(), 0);
}

#[test]
fn second_vote_is_rejected_and_counted_once() {
    let mut election = voting_open(2);
    election.set_vote(&user(1), 2).unwrap();
    assert_eq!(
        election.set_vote(&user(1), 1),
        Err(ElectionError::AlreadyVoted(user(1)))
    );
    assert_eq!(election.get_one_proposal(&user(2), 2).unwrap().vote_count, 1);
    assert_eq!(election.get_one_proposal(&user(2), 1).unwrap().vote_count, 0);
}

// ---------------------------------------------------------------------------
// Voting behaviours
// ---------------------------------------------------------------------------

#[test]
fn registration_is_visible_to_other_voters() {
    let mut election = election_with_voters(1);
    assert!(!election.get_voter(&user(1), &user(2)).unwrap().is_registered);
    election.add_voter(&owner(), user(2)).unwrap();
    let record = election.get_voter(&user(1), &user(2)).unwrap();
    assert!(record.is_registered);
    assert!(!record.has_voted);
    assert_eq!(record.voted_proposal_id, 0);
}

#[test]
fn voter_cannot_register_voters() {
    let mut election = election_with_voters(2);
    assert_eq!(
        election.add_voter(&user(2), user(1)),
        Err(ElectionError::Unauthorized { caller: user(2) })
    );
}

#[test]
fn registering_twice_is_rejected() {
    let mut election = election_with_voters(4);
    assert_eq!(
        election.add_voter(&owner(), user(4)),
        Err(ElectionError::AlreadyRegistered(user(4)))
    );
}

#[test]
fn proposals_keep_their_descriptions() {
    let mut election = election_with_voters(3);
    election.start_proposals_registering(&owner()).unwrap();
    for i in 1..=3 {
        election
            .add_proposal(&user(i), format!("Revolution-{i}"))
            .unwrap();
    }
    assert_eq!(
        election.get_one_proposal(&user(2), 1).unwrap().description,
        "Revolution-1"
    );
    assert_eq!(
        election.get_one_proposal(&user(4), 99),
        Err(ElectionError::NotAVoter(user(4)))
    );
    assert_eq!(
        election.get_one_proposal(&user(1), 99),
        Err(ElectionError::IndexOutOfRange { index: 99, len: 4 })
    );
}

#[test]
fn lifecycle_emits_every_notification_in_order() {
    let mut election = Election::new(owner());
    let log = election.record_events();

    election.add_voter(&owner(), user(1)).unwrap();
    election.start_proposals_registering(&owner()).unwrap();
    election.add_proposal(&user(1), "trees").unwrap();
    election.end_proposals_registering(&owner()).unwrap();
    election.start_voting_session(&owner()).unwrap();
    election.set_vote(&user(1), 1).unwrap();
    election.end_voting_session(&owner()).unwrap();
    election.tally_votes(&owner()).unwrap();

    use WorkflowStatus::*;
    let change = |previous, new| ElectionEvent::WorkflowStatusChange { previous, new };
    assert_eq!(
        log.events(),
        vec![
            ElectionEvent::VoterRegistered { voter: user(1) },
            change(RegisteringVoters, ProposalsRegistrationStarted),
            ElectionEvent::ProposalRegistered { proposal_id: 1 },
            change(ProposalsRegistrationStarted, ProposalsRegistrationEnded),
            change(ProposalsRegistrationEnded, VotingSessionStarted),
            ElectionEvent::Voted {
                voter: user(1),
                proposal_id: 1
            },
            change(VotingSessionStarted, VotingSessionEnded),
            change(VotingSessionEnded, VotesTallied),
        ]
    );
}

#[test]
fn alternating_votes_tally_to_the_majority() {
    let mut election = voting_open(5);
    // Odd users → 1, even users → 2.
    for i in 1..=5 {
        election.set_vote(&user(i), if i % 2 == 1 { 1 } else { 2 }).unwrap();
    }
    assert!(matches!(
        election.tally_votes(&owner()),
        Err(ElectionError::InvalidPhase { .. })
    ));
    election.end_voting_session(&owner()).unwrap();
    assert_eq!(election.workflow_status().code(), 4);
    assert_eq!(
        election.tally_votes(&user(1)),
        Err(ElectionError::Unauthorized { caller: user(1) })
    );
    election.tally_votes(&owner()).unwrap();
    assert_eq!(election.winning_proposal_id(), 1);
    assert_eq!(election.workflow_status().code(), 5);
}

#[test]
fn tie_goes_to_earliest_proposal() {
    let mut election = voting_open(4);
    election.set_vote(&user(1), 3).unwrap();
    election.set_vote(&user(2), 2).unwrap();
    election.set_vote(&user(3), 3).unwrap();
    election.set_vote(&user(4), 2).unwrap();
    election.end_voting_session(&owner()).unwrap();
    election.tally_votes(&owner()).unwrap();
    assert_eq!(election.winning_proposal_id(), 2);
    assert!(election.tally_report().unwrap().tied);
}

#[test]
fn no_transition_is_accepted_twice_or_skipped() {
    let mut election = election_with_voters(1);
    assert!(election.start_voting_session(&owner()).is_err());
    assert!(election.end_voting_session(&owner()).is_err());
    election.start_proposals_registering(&owner()).unwrap();
    assert!(election.start_proposals_registering(&owner()).is_err());
    assert_eq!(election.proposal_count(), 1, "sentinel created once");
    election.end_proposals_registering(&owner()).unwrap();
    assert!(election.end_proposals_registering(&owner()).is_err());
    assert_eq!(
        election.workflow_status(),
        WorkflowStatus::ProposalsRegistrationEnded
    );
}

#[test]
fn every_transition_is_administrator_only() {
    for transition in Transition::ALL {
        let mut election = election_with_voters(2);
        for step in Transition::ALL {
            if election.workflow_status() == transition.required() {
                break;
            }
            election.transition(&owner(), step).unwrap();
        }
        let status = election.workflow_status();
        assert_eq!(status, transition.required());
        let proposals = election.proposal_count();
        let log = election.record_events();

        assert_eq!(
            election.transition(&user(1), transition),
            Err(ElectionError::Unauthorized { caller: user(1) }),
            "{transition}"
        );
        assert_eq!(election.workflow_status(), status);
        assert_eq!(election.proposal_count(), proposals);
        assert_eq!(election.winning_proposal_id(), 0);
        assert!(log.is_empty());

        election.transition(&owner(), transition).unwrap();
        assert_eq!(election.workflow_status(), transition.target());
    }
}
