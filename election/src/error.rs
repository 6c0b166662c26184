use ballot_store::StoreError;
use ballot_types::{AccountId, ProposalId, WorkflowStatus};
use thiserror::Error;

/// Rejections of election operations.
///
/// Every variant is a caller error. An operation that returns one of
/// these has left the election exactly as it found it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ElectionError {
    #[error("caller {caller} is not the administrator")]
    Unauthorized { caller: AccountId },

    #[error("caller {0} is not a registered voter")]
    NotAVoter(AccountId),

    #[error("operation requires phase {required}, current phase is {current}")]
    InvalidPhase {
        required: WorkflowStatus,
        current: WorkflowStatus,
    },

    #[error("{0} is already registered")]
    AlreadyRegistered(AccountId),

    #[error("proposal description must not be empty")]
    EmptyDescription,

    #[error("voter {0} has already voted")]
    AlreadyVoted(AccountId),

    #[error("proposal {0} not found")]
    ProposalNotFound(ProposalId),

    #[error("proposal index {index} out of range for {len} proposals")]
    IndexOutOfRange { index: ProposalId, len: u64 },
}

/// Failures loading an [`ElectionConfig`](crate::ElectionConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Parse(String),
}

/// Failures encoding, restoring or persisting a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot hash mismatch: recorded {recorded}, computed {computed}")]
    IntegrityMismatch { recorded: String, computed: String },

    #[error("inconsistent snapshot: {0}")]
    Inconsistent(String),

    #[error("snapshot encoding error: {0}")]
    Encoding(String),

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl From<bincode::Error> for SnapshotError {
    fn from(e: bincode::Error) -> Self {
        SnapshotError::Encoding(e.to_string())
    }
}
