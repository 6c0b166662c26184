//! The election lifecycle state machine.
//!
//! ```text
//! RegisteringVoters
//!   → ProposalsRegistrationStarted   (start_proposals_registering)
//!   → ProposalsRegistrationEnded     (end_proposals_registering)
//!   → VotingSessionStarted           (start_voting_session)
//!   → VotingSessionEnded             (end_voting_session)
//!   → VotesTallied                   (tally_votes, terminal)
//! ```
//!
//! Phases never regress and never skip. Each transition is legal from
//! exactly one phase.

use ballot_types::WorkflowStatus;
use std::fmt;

use crate::ElectionError;

/// The five administrator-driven phase transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Transition {
    StartProposalsRegistering,
    EndProposalsRegistering,
    StartVotingSession,
    EndVotingSession,
    TallyVotes,
}

impl Transition {
    pub const ALL: [Transition; 5] = [
        Self::StartProposalsRegistering,
        Self::EndProposalsRegistering,
        Self::StartVotingSession,
        Self::EndVotingSession,
        Self::TallyVotes,
    ];

    /// The only phase from which this transition is legal.
    pub fn required(self) -> WorkflowStatus {
        match self {
            Self::StartProposalsRegistering => WorkflowStatus::RegisteringVoters,
            Self::EndProposalsRegistering => WorkflowStatus::ProposalsRegistrationStarted,
            Self::StartVotingSession => WorkflowStatus::ProposalsRegistrationEnded,
            Self::EndVotingSession => WorkflowStatus::VotingSessionStarted,
            Self::TallyVotes => WorkflowStatus::VotingSessionEnded,
        }
    }

    /// The phase entered on success.
    pub fn target(self) -> WorkflowStatus {
        match self {
            Self::StartProposalsRegistering => WorkflowStatus::ProposalsRegistrationStarted,
            Self::EndProposalsRegistering => WorkflowStatus::ProposalsRegistrationEnded,
            Self::StartVotingSession => WorkflowStatus::VotingSessionStarted,
            Self::EndVotingSession => WorkflowStatus::VotingSessionEnded,
            Self::TallyVotes => WorkflowStatus::VotesTallied,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::StartProposalsRegistering => "start_proposals_registering",
            Self::EndProposalsRegistering => "end_proposals_registering",
            Self::StartVotingSession => "start_voting_session",
            Self::EndVotingSession => "end_voting_session",
            Self::TallyVotes => "tally_votes",
        }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current phase plus the rules for moving it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Workflow {
    status: WorkflowStatus,
}

impl Workflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn at(status: WorkflowStatus) -> Self {
        Self { status }
    }

    pub fn status(&self) -> WorkflowStatus {
        self.status
    }

    /// Fail with [`ElectionError::InvalidPhase`] unless the current phase is `required`.
    pub fn require(&self, required: WorkflowStatus) -> Result<(), ElectionError> {
        if self.status == required {
            Ok(())
        } else {
            Err(ElectionError::InvalidPhase {
                required,
                current: self.status,
            })
        }
    }

    /// Check that `transition` is legal now, without applying it.
    pub fn check(&self, transition: Transition) -> Result<(), ElectionError> {
        self.require(transition.required())
    }

    /// Apply `transition` and return `(previous, new)`.
    pub fn advance(
        &mut self,
        transition: Transition,
    ) -> Result<(WorkflowStatus, WorkflowStatus), ElectionError> {
        self.check(transition)?;
        let previous = self.status;
        self.status = transition.target();
        Ok((previous, self.status))
    }
}
