//! Proposal registry: the insertion-ordered proposal sequence.

use ballot_types::{Proposal, ProposalId};

use crate::ElectionError;

/// Proposals in submission order. A proposal's index is its id; entries
/// are never removed or reordered.
#[derive(Clone, Debug, Default)]
pub struct ProposalRegistry {
    proposals: Vec<Proposal>,
}

impl ProposalRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a voter-submitted proposal and return its id.
    pub fn push(&mut self, description: String) -> Result<ProposalId, ElectionError> {
        if description.is_empty() {
            return Err(ElectionError::EmptyDescription);
        }
        Ok(self.push_unchecked(description))
    }

    /// Append the reserved "no choice" entry that occupies index 0.
    pub(crate) fn push_sentinel(&mut self, description: String) -> ProposalId {
        debug_assert!(self.proposals.is_empty(), "sentinel must be the first proposal");
        self.push_unchecked(description)
    }

    fn push_unchecked(&mut self, description: String) -> ProposalId {
        let id = self.len();
        self.proposals.push(Proposal::new(description));
        id
    }

    /// Look up an occupied slot.
    pub fn get(&self, index: ProposalId) -> Result<&Proposal, ElectionError> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.proposals.get(i))
            .ok_or(ElectionError::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }

    /// Validate `id` as a vote target and return its slot.
    ///
    /// An id exactly one past the end is a bounds fault
    /// ([`ElectionError::IndexOutOfRange`]); anything further is an unknown
    /// proposal ([`ElectionError::ProposalNotFound`]).
    pub fn vote_target(&self, id: ProposalId) -> Result<usize, ElectionError> {
        let len = self.len();
        if id > len {
            return Err(ElectionError::ProposalNotFound(id));
        }
        if id == len {
            return Err(ElectionError::IndexOutOfRange { index: id, len });
        }
        // id < len <= usize::MAX here.
        Ok(id as usize)
    }

    /// Count one vote for an already validated slot.
    pub(crate) fn add_vote(&mut self, slot: usize) {
        let proposal = &mut self.proposals[slot];
        proposal.vote_count = proposal.vote_count.saturating_add(1);
    }

    pub fn len(&self) -> u64 {
        self.proposals.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.proposals.is_empty()
    }

    pub fn as_slice(&self) -> &[Proposal] {
        &self.proposals
    }

    /// Sum of all vote counts.
    pub fn total_votes(&self) -> u64 {
        self.proposals.iter().map(|p| p.vote_count).sum()
    }

    pub(crate) fn from_proposals(proposals: Vec<Proposal>) -> Self {
        Self { proposals }
    }
}
