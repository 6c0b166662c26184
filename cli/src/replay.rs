//! Replaying a JSON-lines command journal.

use anyhow::{bail, Context};
use ballot_election::{Election, JournalEntry, Outcome};
use std::io::BufRead;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ReplayStats {
    pub applied: usize,
    pub rejected: usize,
}

/// Apply every entry of `journal` to `election` in order.
///
/// Blank lines are skipped. A line that does not parse is always fatal.
/// A rejected command is logged and skipped, or fatal when `strict`.
pub fn replay(
    election: &mut Election,
    journal: impl BufRead,
    strict: bool,
) -> anyhow::Result<ReplayStats> {
    let mut stats = ReplayStats::default();
    for (index, line) in journal.lines().enumerate() {
        let line_no = index + 1;
        let line = line.with_context(|| format!("failed to read journal line {line_no}"))?;
        if line.trim().is_empty() {
            continue;
        }
        let entry = JournalEntry::from_json_line(&line)
            .with_context(|| format!("malformed journal entry on line {line_no}"))?;
        let op = entry.command.name();
        let caller = entry.caller.clone();

        match election.apply(entry) {
            Ok(Outcome::ProposalAdded(id)) => {
                tracing::debug!(line = line_no, proposal_id = id, "proposal added");
                stats.applied += 1;
            }
            Ok(Outcome::Done) => stats.applied += 1,
            Err(e) if strict => {
                bail!("line {line_no}: {op} by {caller} rejected: {e}");
            }
            Err(e) => {
                tracing::warn!(line = line_no, op, caller = %caller, error = %e, "entry rejected");
                stats.rejected += 1;
            }
        }
    }
    Ok(stats)
}
