//! Vote counting.

use ballot_types::{Proposal, ProposalId};
use serde::{Deserialize, Serialize};

/// Index of the proposal with the highest vote count.
///
/// Scans in index order and only replaces the leader on a strictly
/// greater count, so ties go to the lowest index. An empty sequence
/// yields 0.
pub fn winning_proposal(proposals: &[Proposal]) -> ProposalId {
    tally(proposals).winner
}

/// Summary of a count, computed by the same scan as [`winning_proposal`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TallyReport {
    pub winner: ProposalId,
    pub winning_votes: u64,
    pub total_votes: u64,
    /// Another proposal reached the same maximum as the winner.
    pub tied: bool,
}

pub fn tally(proposals: &[Proposal]) -> TallyReport {
    let mut report = TallyReport {
        winner: 0,
        winning_votes: 0,
        total_votes: 0,
        tied: false,
    };
    for (index, proposal) in proposals.iter().enumerate() {
        report.total_votes = report.total_votes.saturating_add(proposal.vote_count);
        if index == 0 || proposal.vote_count > report.winning_votes {
            report.winner = index as ProposalId;
            report.winning_votes = proposal.vote_count;
            report.tied = false;
        } else if proposal.vote_count == report.winning_votes {
            report.tied = true;
        }
    }
    report
}
