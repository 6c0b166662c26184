//! Voter registry: identity → voter record.

use ballot_types::{AccountId, ProposalId, Voter};
use std::collections::HashMap;

use crate::ElectionError;

/// Every identity the administrator has registered.
///
/// Records are inserted once and never removed; the only mutation after
/// insertion is [`mark_voted`](Self::mark_voted).
#[derive(Clone, Debug, Default)]
pub struct VoterRegistry {
    voters: HashMap<AccountId, Voter>,
}

impl VoterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a freshly registered record for `id`.
    pub fn register(&mut self, id: AccountId) -> Result<(), ElectionError> {
        if self.voters.contains_key(&id) {
            return Err(ElectionError::AlreadyRegistered(id));
        }
        self.voters.insert(id, Voter::registered());
        Ok(())
    }

    pub fn get(&self, id: &AccountId) -> Option<&Voter> {
        self.voters.get(id)
    }

    /// The record for `id`, or the unregistered default if there is none.
    pub fn lookup(&self, id: &AccountId) -> Voter {
        self.get(id).copied().unwrap_or_else(Voter::unregistered)
    }

    pub fn is_registered(&self, id: &AccountId) -> bool {
        self.get(id).is_some_and(|v| v.is_registered)
    }

    /// The caller's record, or [`ElectionError::NotAVoter`].
    pub fn ensure_registered(&self, id: &AccountId) -> Result<&Voter, ElectionError> {
        self.get(id)
            .filter(|v| v.is_registered)
            .ok_or_else(|| ElectionError::NotAVoter(id.clone()))
    }

    /// Record that `id` voted for `proposal_id`.
    ///
    /// Fails without mutating if `id` is unknown or has already voted.
    pub fn mark_voted(
        &mut self,
        id: &AccountId,
        proposal_id: ProposalId,
    ) -> Result<(), ElectionError> {
        let voter = self
            .voters
            .get_mut(id)
            .filter(|v| v.is_registered)
            .ok_or_else(|| ElectionError::NotAVoter(id.clone()))?;
        if voter.has_voted {
            return Err(ElectionError::AlreadyVoted(id.clone()));
        }
        voter.has_voted = true;
        voter.voted_proposal_id = proposal_id;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.voters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voters.is_empty()
    }

    /// Number of registered voters that have cast their vote.
    pub fn turnout(&self) -> usize {
        self.voters.values().filter(|v| v.has_voted).count()
    }

    /// Records sorted by identity, for deterministic output.
    pub fn sorted(&self) -> Vec<(AccountId, Voter)> {
        let mut records: Vec<_> = self
            .voters
            .iter()
            .map(|(id, voter)| (id.clone(), *voter))
            .collect();
        records.sort_by(|a, b| a.0.cmp(&b.0));
        records
    }

    pub(crate) fn from_records(records: impl IntoIterator<Item = (AccountId, Voter)>) -> Self {
        Self {
            voters: records.into_iter().collect(),
        }
    }
}
