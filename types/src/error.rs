//! Errors raised while constructing the fundamental types.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypesError {
    #[error("invalid account id: {0:?}")]
    InvalidAccountId(String),

    #[error("unknown workflow status code: {0}")]
    UnknownStatusCode(u8),
}
