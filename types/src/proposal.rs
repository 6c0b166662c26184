//! Proposals and their identifiers.

use serde::{Deserialize, Serialize};

/// A proposal's 0-based position in the insertion-ordered sequence.
pub type ProposalId = u64;

/// A proposal submitted during the proposal-registration phase.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    pub description: String,
    pub vote_count: u64,
}

impl Proposal {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            vote_count: 0,
        }
    }
}
