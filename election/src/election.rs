//! The election aggregate, the single writer path for all election state.
//!
//! Every public operation follows the same shape: authorize the caller,
//! check the phase, validate the input, and only then mutate and emit.
//! A rejected operation therefore never leaves a partial write behind.

use ballot_types::{AccountId, Proposal, ProposalId, Voter, WorkflowStatus};

use crate::access::AccessGuard;
use crate::config::ElectionConfig;
use crate::events::{ElectionEvent, EventBus, EventLog};
use crate::proposals::ProposalRegistry;
use crate::tally::{self, TallyReport};
use crate::voters::VoterRegistry;
use crate::workflow::{Transition, Workflow};
use crate::ElectionError;

/// One election, from voter registration to the tallied result.
#[derive(Debug)]
pub struct Election {
    pub(crate) guard: AccessGuard,
    pub(crate) voters: VoterRegistry,
    pub(crate) proposals: ProposalRegistry,
    pub(crate) workflow: Workflow,
    pub(crate) winning_proposal_id: ProposalId,
    pub(crate) sentinel_description: String,
    pub(crate) restrict_voter_registration: bool,
    pub(crate) events: EventBus,
}

impl Election {
    /// A new election in `RegisteringVoters` with empty registries.
    pub fn new(administrator: AccountId) -> Self {
        let config = ElectionConfig::new(administrator);
        Self::empty(&config)
    }

    /// Build an election from configuration, registering its initial voters.
    pub fn from_config(config: &ElectionConfig) -> Result<Self, ElectionError> {
        let mut election = Self::empty(config);
        let administrator = config.administrator.clone();
        for voter in &config.voters {
            election.add_voter(&administrator, voter.clone())?;
        }
        Ok(election)
    }

    fn empty(config: &ElectionConfig) -> Self {
        Self {
            guard: AccessGuard::new(config.administrator.clone()),
            voters: VoterRegistry::new(),
            proposals: ProposalRegistry::new(),
            workflow: Workflow::new(),
            winning_proposal_id: 0,
            sentinel_description: config.sentinel_description.clone(),
            restrict_voter_registration: config.restrict_voter_registration,
            events: EventBus::new(),
        }
    }

    // ── Events ─────────────────────────────────────────────────────────

    pub fn subscribe(&mut self, listener: Box<dyn Fn(&ElectionEvent) + Send + Sync>) {
        self.events.subscribe(listener);
    }

    /// Subscribe a fresh [`EventLog`] and return it.
    pub fn record_events(&mut self) -> EventLog {
        let log = EventLog::new();
        self.events.subscribe(log.listener());
        log
    }

    // ── Reads open to anyone ───────────────────────────────────────────

    pub fn administrator(&self) -> &AccountId {
        self.guard.administrator()
    }

    pub fn workflow_status(&self) -> WorkflowStatus {
        self.workflow.status()
    }

    /// 0 until the votes have been tallied.
    pub fn winning_proposal_id(&self) -> ProposalId {
        self.winning_proposal_id
    }

    /// The winning proposal, once the votes have been tallied.
    pub fn winning_proposal(&self) -> Option<&Proposal> {
        if self.workflow.status() != WorkflowStatus::VotesTallied {
            return None;
        }
        self.proposals.get(self.winning_proposal_id).ok()
    }

    /// Detailed count, once the votes have been tallied.
    pub fn tally_report(&self) -> Option<TallyReport> {
        (self.workflow.status() == WorkflowStatus::VotesTallied)
            .then(|| tally::tally(self.proposals.as_slice()))
    }

    pub fn proposal_count(&self) -> u64 {
        self.proposals.len()
    }

    pub fn voter_count(&self) -> usize {
        self.voters.len()
    }

    pub fn voters(&self) -> &VoterRegistry {
        &self.voters
    }

    pub fn proposals(&self) -> &ProposalRegistry {
        &self.proposals
    }

    pub fn sentinel_description(&self) -> &str {
        &self.sentinel_description
    }

    pub fn restricts_voter_registration(&self) -> bool {
        self.restrict_voter_registration
    }

    // ── Voter registry ─────────────────────────────────────────────────

    /// Register `voter`. Administrator only.
    pub fn add_voter(&mut self, caller: &AccountId, voter: AccountId) -> Result<(), ElectionError> {
        let result = self.try_add_voter(caller, voter);
        log_rejection("add_voter", caller, result)
    }

    fn try_add_voter(&mut self, caller: &AccountId, voter: AccountId) -> Result<(), ElectionError> {
        self.guard.ensure_administrator(caller)?;
        if self.restrict_voter_registration {
            self.workflow.require(WorkflowStatus::RegisteringVoters)?;
        }
        self.voters.register(voter.clone())?;
        tracing::info!(voter = %voter, "voter registered");
        self.events.emit(&ElectionEvent::VoterRegistered { voter });
        Ok(())
    }

    /// The record of any identity. The caller must be a registered voter.
    pub fn get_voter(&self, caller: &AccountId, voter: &AccountId) -> Result<Voter, ElectionError> {
        let result = self.voters.ensure_registered(caller).map(|_| self.voters.lookup(voter));
        tracing::trace!(caller = %caller, voter = %voter, "get_voter");
        log_rejection("get_voter", caller, result)
    }

    // ── Proposal registry ──────────────────────────────────────────────

    /// Submit a proposal and return its id.
    pub fn add_proposal(
        &mut self,
        caller: &AccountId,
        description: impl Into<String>,
    ) -> Result<ProposalId, ElectionError> {
        let result = self.try_add_proposal(caller, description.into());
        log_rejection("add_proposal", caller, result)
    }

    fn try_add_proposal(
        &mut self,
        caller: &AccountId,
        description: String,
    ) -> Result<ProposalId, ElectionError> {
        self.voters.ensure_registered(caller)?;
        self.workflow
            .require(WorkflowStatus::ProposalsRegistrationStarted)?;
        let proposal_id = self.proposals.push(description)?;
        tracing::info!(proposer = %caller, proposal_id, "proposal registered");
        self.events
            .emit(&ElectionEvent::ProposalRegistered { proposal_id });
        Ok(proposal_id)
    }

    /// The proposal at `index`. The caller must be a registered voter.
    pub fn get_one_proposal(
        &self,
        caller: &AccountId,
        index: ProposalId,
    ) -> Result<&Proposal, ElectionError> {
        let result = self
            .voters
            .ensure_registered(caller)
            .and_then(|_| self.proposals.get(index));
        tracing::trace!(caller = %caller, index, "get_one_proposal");
        log_rejection("get_one_proposal", caller, result)
    }

    // ── Voting ─────────────────────────────────────────────────────────

    /// Cast the caller's single vote for `proposal_id`.
    pub fn set_vote(
        &mut self,
        caller: &AccountId,
        proposal_id: ProposalId,
    ) -> Result<(), ElectionError> {
        let result = self.try_set_vote(caller, proposal_id);
        log_rejection("set_vote", caller, result)
    }

    fn try_set_vote(
        &mut self,
        caller: &AccountId,
        proposal_id: ProposalId,
    ) -> Result<(), ElectionError> {
        let voter = self.voters.ensure_registered(caller)?;
        self.workflow.require(WorkflowStatus::VotingSessionStarted)?;
        if !voter.can_vote() {
            return Err(ElectionError::AlreadyVoted(caller.clone()));
        }
        let slot = self.proposals.vote_target(proposal_id)?;

        self.voters.mark_voted(caller, proposal_id)?;
        self.proposals.add_vote(slot);
        tracing::info!(voter = %caller, proposal_id, "vote cast");
        self.events.emit(&ElectionEvent::Voted {
            voter: caller.clone(),
            proposal_id,
        });
        Ok(())
    }

    // ── Workflow transitions ───────────────────────────────────────────

    /// Open proposal registration. Creates the sentinel proposal at index 0.
    pub fn start_proposals_registering(&mut self, caller: &AccountId) -> Result<(), ElectionError> {
        self.transition(caller, Transition::StartProposalsRegistering)
    }

    pub fn end_proposals_registering(&mut self, caller: &AccountId) -> Result<(), ElectionError> {
        self.transition(caller, Transition::EndProposalsRegistering)
    }

    pub fn start_voting_session(&mut self, caller: &AccountId) -> Result<(), ElectionError> {
        self.transition(caller, Transition::StartVotingSession)
    }

    pub fn end_voting_session(&mut self, caller: &AccountId) -> Result<(), ElectionError> {
        self.transition(caller, Transition::EndVotingSession)
    }

    /// Count the votes, record the winner and close the election.
    pub fn tally_votes(&mut self, caller: &AccountId) -> Result<(), ElectionError> {
        self.transition(caller, Transition::TallyVotes)
    }

    /// Apply any of the five phase transitions.
    pub fn transition(
        &mut self,
        caller: &AccountId,
        transition: Transition,
    ) -> Result<(), ElectionError> {
        let result = self.try_transition(caller, transition);
        log_rejection(transition.as_str(), caller, result)
    }

    fn try_transition(
        &mut self,
        caller: &AccountId,
        transition: Transition,
    ) -> Result<(), ElectionError> {
        self.guard.ensure_administrator(caller)?;
        self.workflow.check(transition)?;

        match transition {
            Transition::StartProposalsRegistering => {
                self.proposals
                    .push_sentinel(self.sentinel_description.clone());
            }
            Transition::TallyVotes => {
                let report = tally::tally(self.proposals.as_slice());
                self.winning_proposal_id = report.winner;
                tracing::info!(
                    winner = report.winner,
                    votes = report.winning_votes,
                    total = report.total_votes,
                    tied = report.tied,
                    "votes tallied"
                );
            }
            _ => {}
        }

        let (previous, new) = self.workflow.advance(transition)?;
        tracing::info!(%previous, %new, "workflow status changed");
        self.events
            .emit(&ElectionEvent::WorkflowStatusChange { previous, new });
        Ok(())
    }

    // ── Administration ─────────────────────────────────────────────────

    /// Hand the administrator role to `new_administrator`.
    pub fn transfer_administration(
        &mut self,
        caller: &AccountId,
        new_administrator: AccountId,
    ) -> Result<(), ElectionError> {
        let result = self
            .guard
            .ensure_administrator(caller)
            .map(|()| self.guard.transfer(new_administrator.clone()));
        let previous = log_rejection("transfer_administration", caller, result)?;
        tracing::info!(%previous, new = %new_administrator, "administration transferred");
        self.events.emit(&ElectionEvent::AdministrationTransferred {
            previous,
            new: new_administrator,
        });
        Ok(())
    }
}

fn log_rejection<T>(
    operation: &str,
    caller: &AccountId,
    result: Result<T, ElectionError>,
) -> Result<T, ElectionError> {
    result.inspect_err(|e| {
        tracing::debug!(operation, caller = %caller, error = %e, "operation rejected");
    })
}
