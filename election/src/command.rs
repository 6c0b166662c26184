//! Serializable commands and the journal format.
//!
//! A journal is a JSON-lines file; each line is one [`JournalEntry`]:
//!
//! ```text
//! {"caller":"owner","command":{"op":"add_voter","voter":"user1"}}
//! {"caller":"owner","command":{"op":"start_proposals_registering"}}
//! {"caller":"user1","command":{"op":"add_proposal","description":"Plant trees"}}
//! {"caller":"user1","command":{"op":"set_vote","proposal_id":1}}
//! ```

use ballot_types::{AccountId, ProposalId};
use serde::{Deserialize, Serialize};

use crate::workflow::Transition;
use crate::{Election, ElectionError};

/// One mutating election operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ElectionCommand {
    AddVoter { voter: AccountId },
    StartProposalsRegistering,
    AddProposal { description: String },
    EndProposalsRegistering,
    StartVotingSession,
    SetVote { proposal_id: ProposalId },
    EndVotingSession,
    TallyVotes,
    TransferAdministration { new_administrator: AccountId },
}

impl ElectionCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddVoter { .. } => "add_voter",
            Self::StartProposalsRegistering => "start_proposals_registering",
            Self::AddProposal { .. } => "add_proposal",
            Self::EndProposalsRegistering => "end_proposals_registering",
            Self::StartVotingSession => "start_voting_session",
            Self::SetVote { .. } => "set_vote",
            Self::EndVotingSession => "end_voting_session",
            Self::TallyVotes => "tally_votes",
            Self::TransferAdministration { .. } => "transfer_administration",
        }
    }
}

impl From<Transition> for ElectionCommand {
    fn from(t: Transition) -> Self {
        match t {
            Transition::StartProposalsRegistering => Self::StartProposalsRegistering,
            Transition::EndProposalsRegistering => Self::EndProposalsRegistering,
            Transition::StartVotingSession => Self::StartVotingSession,
            Transition::EndVotingSession => Self::EndVotingSession,
            Transition::TallyVotes => Self::TallyVotes,
        }
    }
}

/// A command together with the identity that issued it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub caller: AccountId,
    pub command: ElectionCommand,
}

impl JournalEntry {
    pub fn new(caller: AccountId, command: ElectionCommand) -> Self {
        Self { caller, command }
    }

    pub fn from_json_line(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }

    pub fn to_json_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// What a successfully executed command produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Done,
    ProposalAdded(ProposalId),
}

impl Election {
    /// Run one command on behalf of `caller`.
    pub fn execute(
        &mut self,
        caller: &AccountId,
        command: ElectionCommand,
    ) -> Result<Outcome, ElectionError> {
        let result = match command {
            ElectionCommand::AddVoter { voter } => self.add_voter(caller, voter),
            ElectionCommand::StartProposalsRegistering => self.start_proposals_registering(caller),
            ElectionCommand::AddProposal { description } => {
                return self
                    .add_proposal(caller, description)
                    .map(Outcome::ProposalAdded);
            }
            ElectionCommand::EndProposalsRegistering => self.end_proposals_registering(caller),
            ElectionCommand::StartVotingSession => self.start_voting_session(caller),
            ElectionCommand::SetVote { proposal_id } => self.set_vote(caller, proposal_id),
            ElectionCommand::EndVotingSession => self.end_voting_session(caller),
            ElectionCommand::TallyVotes => self.tally_votes(caller),
            ElectionCommand::TransferAdministration { new_administrator } => {
                self.transfer_administration(caller, new_administrator)
            }
        };
        result.map(|()| Outcome::Done)
    }

    /// Run a journal entry.
    pub fn apply(&mut self, entry: JournalEntry) -> Result<Outcome, ElectionError> {
        self.execute(&entry.caller, entry.command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ballot_types::WorkflowStatus;

    fn id(s: &str) -> AccountId {
        AccountId::new(s)
    }

    #[test]
    fn parses_journal_lines() {
        let entry = JournalEntry::from_json_line(
            r#"{"caller":"user1","command":{"op":"set_vote","proposal_id":2}}"#,
        )
        .unwrap();
        assert_eq!(entry.caller, id("user1"));
        assert_eq!(entry.command, ElectionCommand::SetVote { proposal_id: 2 });
    }

    #[test]
    fn unit_commands_need_only_the_tag() {
        let entry = JournalEntry::from_json_line(
            r#"{"caller":"owner","command":{"op":"tally_votes"}}"#,
        )
        .unwrap();
        assert_eq!(entry.command, ElectionCommand::TallyVotes);
    }

    #[test]
    fn unknown_op_is_rejected() {
        assert!(JournalEntry::from_json_line(
            r#"{"caller":"owner","command":{"op":"delete_everything"}}"#
        )
        .is_err());
    }

    #[test]
    fn json_line_round_trips() {
        let entry = JournalEntry::new(
            id("owner"),
            ElectionCommand::AddVoter { voter: id("user1") },
        );
        let line = entry.to_json_line().unwrap();
        assert_eq!(JournalEntry::from_json_line(&line).unwrap(), entry);
    }

    #[test]
    fn execute_dispatches_to_operations() {
        let owner = id("owner");
        let mut election = Election::new(owner.clone());
        let script = [
            (owner.clone(), ElectionCommand::AddVoter { voter: id("u1") }),
            (owner.clone(), ElectionCommand::StartProposalsRegistering),
            (
                id("u1"),
                ElectionCommand::AddProposal {
                    description: "trees".into(),
                },
            ),
            (owner.clone(), ElectionCommand::EndProposalsRegistering),
            (owner.clone(), ElectionCommand::StartVotingSession),
            (id("u1"), ElectionCommand::SetVote { proposal_id: 1 }),
            (owner.clone(), ElectionCommand::EndVotingSession),
            (owner.clone(), ElectionCommand::TallyVotes),
        ];
        let outcomes: Vec<_> = script
            .into_iter()
            .map(|(caller, cmd)| election.execute(&caller, cmd).unwrap())
            .collect();
        assert_eq!(outcomes[2], Outcome::ProposalAdded(1));
        assert!(outcomes
            .iter()
            .enumerate()
            .all(|(i, o)| i == 2 || *o == Outcome::Done));
        assert_eq!(election.workflow_status(), WorkflowStatus::VotesTallied);
        assert_eq!(election.winning_proposal_id(), 1);
    }

    #[test]
    fn transitions_convert_to_commands() {
        for t in Transition::ALL {
            assert_eq!(ElectionCommand::from(t).name(), t.as_str());
        }
    }
}
