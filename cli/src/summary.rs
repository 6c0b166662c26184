//! JSON summaries printed on stdout.

use ballot_election::Election;
use ballot_types::ProposalId;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ProposalSummary {
    pub id: ProposalId,
    pub description: String,
    pub vote_count: u64,
}

#[derive(Debug, Serialize)]
pub struct ElectionSummary {
    pub administrator: String,
    pub phase: u8,
    pub phase_name: &'static str,
    pub voters: usize,
    pub turnout: usize,
    pub proposals: Vec<ProposalSummary>,
    /// Only present once votes are tallied.
    pub winner: Option<ProposalId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected: Option<usize>,
}

impl ElectionSummary {
    pub fn of(election: &Election) -> Self {
        let status = election.workflow_status();
        Self {
            administrator: election.administrator().to_string(),
            phase: status.code(),
            phase_name: status.as_str(),
            voters: election.voter_count(),
            turnout: election.voters().turnout(),
            proposals: election
                .proposals()
                .as_slice()
                .iter()
                .enumerate()
                .map(|(id, p)| ProposalSummary {
                    id: id as ProposalId,
                    description: p.description.clone(),
                    vote_count: p.vote_count,
                })
                .collect(),
            winner: election
                .winning_proposal()
                .map(|_| election.winning_proposal_id()),
            rejected: None,
        }
    }

    pub fn with_rejected(mut self, rejected: usize) -> Self {
        self.rejected = Some(rejected);
        self
    }
}
