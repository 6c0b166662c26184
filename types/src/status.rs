//! The six phases of an election.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::TypesError;

/// The current stage of the election lifecycle.
///
/// Phases are totally ordered; an election walks them one step at a time
/// from [`RegisteringVoters`](Self::RegisteringVoters) to the terminal
/// [`VotesTallied`](Self::VotesTallied).
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum WorkflowStatus {
    /// The administrator is enrolling voters.
    #[default]
    RegisteringVoters,
    /// Registered voters may submit proposals.
    ProposalsRegistrationStarted,
    /// Proposal submission is closed; voting has not opened.
    ProposalsRegistrationEnded,
    /// Registered voters may cast their single vote.
    VotingSessionStarted,
    /// Voting is closed; votes are not yet counted.
    VotingSessionEnded,
    /// The winner has been computed. Terminal.
    VotesTallied,
}

impl WorkflowStatus {
    /// All phases in lifecycle order.
    pub const ALL: [WorkflowStatus; 6] = [
        Self::RegisteringVoters,
        Self::ProposalsRegistrationStarted,
        Self::ProposalsRegistrationEnded,
        Self::VotingSessionStarted,
        Self::VotingSessionEnded,
        Self::VotesTallied,
    ];

    /// The phase that follows this one, or `None` for the terminal phase.
    pub fn next(self) -> Option<Self> {
        Self::ALL.get(self.code() as usize + 1).copied()
    }

    /// The phase that must be current for this one to be entered.
    pub fn predecessor(self) -> Option<Self> {
        (self.code() as usize)
            .checked_sub(1)
            .map(|i| Self::ALL[i])
    }

    /// Stable numeric code (0..=5), used in events and serialized output.
    pub fn code(self) -> u8 {
        match self {
            Self::RegisteringVoters => 0,
            Self::ProposalsRegistrationStarted => 1,
            Self::ProposalsRegistrationEnded => 2,
            Self::VotingSessionStarted => 3,
            Self::VotingSessionEnded => 4,
            Self::VotesTallied => 5,
        }
    }

    /// Inverse of [`code`](Self::code).
    pub fn from_code(code: u8) -> Result<Self, TypesError> {
        Self::ALL
            .get(code as usize)
            .copied()
            .ok_or(TypesError::UnknownStatusCode(code))
    }

    pub fn is_terminal(self) -> bool {
        self == Self::VotesTallied
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::RegisteringVoters => "registering_voters",
            Self::ProposalsRegistrationStarted => "proposals_registration_started",
            Self::ProposalsRegistrationEnded => "proposals_registration_ended",
            Self::VotingSessionStarted => "voting_session_started",
            Self::VotingSessionEnded => "voting_session_ended",
            Self::VotesTallied => "votes_tallied",
        }
    }
}

impl fmt::Display for WorkflowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
