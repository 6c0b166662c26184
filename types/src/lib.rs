//! Fundamental types for the ballot workspace.
//!
//! Every other crate builds on these: account identities, the workflow
//! status enum, and the voter and proposal records.

pub mod account;
pub mod error;
pub mod proposal;
pub mod status;
pub mod voter;

pub use account::AccountId;
pub use error::TypesError;
pub use proposal::{Proposal, ProposalId};
pub use status::WorkflowStatus;
pub use voter::Voter;
