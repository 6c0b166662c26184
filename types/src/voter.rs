//! Voter records.

use serde::{Deserialize, Serialize};

use crate::ProposalId;

/// What the election knows about one identity.
///
/// The identity itself is the registry key and is not repeated here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voter {
    pub is_registered: bool,
    pub has_voted: bool,
    /// Meaningful only once `has_voted` is true.
    pub voted_proposal_id: ProposalId,
}

impl Voter {
    /// A freshly registered voter who has not voted yet.
    pub fn registered() -> Self {
        Self {
            is_registered: true,
            has_voted: false,
            voted_proposal_id: 0,
        }
    }

    /// The record reported for an identity that was never registered.
    pub fn unregistered() -> Self {
        Self::default()
    }

    /// Whether this voter may still cast a vote.
    pub fn can_vote(&self) -> bool {
        self.is_registered && !self.has_voted
    }
}
