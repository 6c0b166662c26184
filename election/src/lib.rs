//! Single-election voting workflow.
//!
//! One administrator registers voters and walks the election through six
//! phases; registered voters submit proposals and each casts exactly one
//! vote; the tally picks the proposal with the strictly highest count,
//! lowest index on ties.
//!
//! [`Election`] is the aggregate and the only writer. Its parts are
//! usable on their own: [`access`] (administrator predicate),
//! [`voters`] and [`proposals`] (registries), [`workflow`] (phase state
//! machine) and [`tally`] (pure winner computation).

pub mod access;
pub mod command;
pub mod config;
pub mod election;
pub mod error;
pub mod events;
pub mod persist;
pub mod proposals;
pub mod shared;
pub mod snapshot;
pub mod tally;
pub mod voters;
pub mod workflow;

pub use access::{is_administrator, AccessGuard};
pub use command::{ElectionCommand, JournalEntry, Outcome};
pub use config::ElectionConfig;
pub use election::Election;
pub use error::{ConfigError, ElectionError, SnapshotError};
pub use events::{ElectionEvent, EventBus, EventLog};
pub use proposals::ProposalRegistry;
pub use shared::SharedElection;
pub use snapshot::{ElectionSnapshot, VoterEntry, SNAPSHOT_VERSION};
pub use tally::{winning_proposal, TallyReport};
pub use voters::VoterRegistry;
pub use workflow::{Transition, Workflow};

pub use ballot_types::{AccountId, Proposal, ProposalId, Voter, WorkflowStatus};
