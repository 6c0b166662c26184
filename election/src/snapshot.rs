//! Election snapshots: the full aggregate as plain data.
//!
//! A snapshot carries a Blake2b-256 hash of its content so a host can
//! detect corruption in storage or transport. Restoring re-checks the
//! hash and every cross-record invariant before handing back a live
//! [`Election`]. Event listeners are not part of a snapshot.

use ballot_types::{AccountId, Proposal, ProposalId, Voter, WorkflowStatus};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::access::AccessGuard;
use crate::events::EventBus;
use crate::proposals::ProposalRegistry;
use crate::tally;
use crate::voters::VoterRegistry;
use crate::workflow::Workflow;
use crate::{Election, SnapshotError};

/// Current snapshot format version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// One voter registry entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoterEntry {
    pub id: AccountId,
    pub voter: Voter,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectionSnapshot {
    pub version: u32,
    pub administrator: AccountId,
    pub status: WorkflowStatus,
    /// Sorted by identity.
    pub voters: Vec<VoterEntry>,
    pub proposals: Vec<Proposal>,
    pub winning_proposal_id: ProposalId,
    pub sentinel_description: String,
    pub restrict_voter_registration: bool,
    /// Hex-encoded Blake2b-256 of everything above.
    pub hash: String,
}

impl ElectionSnapshot {
    /// Recompute the content hash.
    pub fn compute_hash(&self) -> String {
        use blake2::digest::consts::U32;
        use blake2::{Blake2b, Digest};

        fn put_str(hasher: &mut Blake2b<U32>, s: &str) {
            hasher.update((s.len() as u64).to_le_bytes());
            hasher.update(s.as_bytes());
        }

        let mut hasher = Blake2b::<U32>::new();
        hasher.update(self.version.to_le_bytes());
        put_str(&mut hasher, self.administrator.as_str());
        hasher.update([self.status.code()]);
        hasher.update((self.voters.len() as u64).to_le_bytes());
        for entry in &self.voters {
            put_str(&mut hasher, entry.id.as_str());
            hasher.update([entry.voter.is_registered as u8, entry.voter.has_voted as u8]);
            hasher.update(entry.voter.voted_proposal_id.to_le_bytes());
        }
        hasher.update((self.proposals.len() as u64).to_le_bytes());
        for proposal in &self.proposals {
            put_str(&mut hasher, &proposal.description);
            hasher.update(proposal.vote_count.to_le_bytes());
        }
        hasher.update(self.winning_proposal_id.to_le_bytes());
        put_str(&mut hasher, &self.sentinel_description);
        hasher.update([self.restrict_voter_registration as u8]);
        hex::encode(hasher.finalize())
    }

    /// Whether the recorded hash matches the content.
    pub fn verify_hash(&self) -> Result<(), SnapshotError> {
        let computed = self.compute_hash();
        if computed == self.hash {
            Ok(())
        } else {
            Err(SnapshotError::IntegrityMismatch {
                recorded: self.hash.clone(),
                computed,
            })
        }
    }

    /// Check every invariant that links voters, proposals and phase.
    pub fn check_consistency(&self) -> Result<(), SnapshotError> {
        let inconsistent =
            |msg: String| -> Result<(), SnapshotError> { Err(SnapshotError::Inconsistent(msg)) };

        if self.version != SNAPSHOT_VERSION {
            return inconsistent(format!("unsupported version {}", self.version));
        }

        let opened = self.status >= WorkflowStatus::ProposalsRegistrationStarted;
        if opened == self.proposals.is_empty() {
            return inconsistent(format!(
                "{} proposals in phase {}",
                self.proposals.len(),
                self.status
            ));
        }
        if let Some(first) = self.proposals.first() {
            if first.description != self.sentinel_description {
                return inconsistent(format!(
                    "proposal 0 is {:?}, expected sentinel {:?}",
                    first.description, self.sentinel_description
                ));
            }
        }
        if let Some((i, _)) = self
            .proposals
            .iter()
            .enumerate()
            .skip(1)
            .find(|(_, p)| p.description.is_empty())
        {
            return inconsistent(format!("proposal {i} has an empty description"));
        }

        let mut seen = HashSet::new();
        let mut ballots = vec![0u64; self.proposals.len()];
        for entry in &self.voters {
            if !seen.insert(&entry.id) {
                return inconsistent(format!("voter {} listed twice", entry.id));
            }
            let voter = entry.voter;
            if !voter.is_registered {
                return inconsistent(format!("voter {} is not registered", entry.id));
            }
            if !voter.has_voted {
                if voter.voted_proposal_id != 0 {
                    return inconsistent(format!("voter {} has a choice but no vote", entry.id));
                }
                continue;
            }
            if self.status < WorkflowStatus::VotingSessionStarted {
                return inconsistent(format!("voter {} voted in phase {}", entry.id, self.status));
            }
            match ballots.get_mut(voter.voted_proposal_id as usize) {
                Some(count) => *count += 1,
                None => {
                    return inconsistent(format!(
                        "voter {} voted for missing proposal {}",
                        entry.id, voter.voted_proposal_id
                    ))
                }
            }
        }
        for (i, (proposal, expected)) in self.proposals.iter().zip(&ballots).enumerate() {
            if proposal.vote_count != *expected {
                return inconsistent(format!(
                    "proposal {i} counts {} votes, ballots say {expected}",
                    proposal.vote_count
                ));
            }
        }

        let expected_winner = if self.status == WorkflowStatus::VotesTallied {
            tally::winning_proposal(&self.proposals)
        } else {
            0
        };
        if self.winning_proposal_id != expected_winner {
            return inconsistent(format!(
                "winner {} recorded, expected {expected_winner}",
                self.winning_proposal_id
            ));
        }
        Ok(())
    }
}

impl Election {
    /// Capture the whole aggregate.
    pub fn snapshot(&self) -> ElectionSnapshot {
        let mut snapshot = ElectionSnapshot {
            version: SNAPSHOT_VERSION,
            administrator: self.guard.administrator().clone(),
            status: self.workflow.status(),
            voters: self
                .voters
                .sorted()
                .into_iter()
                .map(|(id, voter)| VoterEntry { id, voter })
                .collect(),
            proposals: self.proposals.as_slice().to_vec(),
            winning_proposal_id: self.winning_proposal_id,
            sentinel_description: self.sentinel_description.clone(),
            restrict_voter_registration: self.restrict_voter_registration,
            hash: String::new(),
        };
        snapshot.hash = snapshot.compute_hash();
        snapshot
    }

    /// Rebuild an election from a verified snapshot. No listeners are attached.
    pub fn restore(snapshot: ElectionSnapshot) -> Result<Self, SnapshotError> {
        snapshot.verify_hash()?;
        snapshot.check_consistency()?;
        tracing::debug!(
            status = %snapshot.status,
            voters = snapshot.voters.len(),
            proposals = snapshot.proposals.len(),
            "election restored from snapshot"
        );
        Ok(Self {
            guard: AccessGuard::new(snapshot.administrator),
            voters: VoterRegistry::from_records(
                snapshot.voters.into_iter().map(|e| (e.id, e.voter)),
            ),
            proposals: ProposalRegistry::from_proposals(snapshot.proposals),
            workflow: Workflow::at(snapshot.status),
            winning_proposal_id: snapshot.winning_proposal_id,
            sentinel_description: snapshot.sentinel_description,
            restrict_voter_registration: snapshot.restrict_voter_registration,
            events: EventBus::new(),
        })
    }
}
