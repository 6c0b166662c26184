//! Caller identities.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::TypesError;

/// The identity of a caller: the administrator or a (prospective) voter.
///
/// Identities are opaque, non-empty strings with no surrounding
/// whitespace. Equality is exact, so `"alice"` and `"Alice"` are two
/// different callers.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccountId(String);

impl AccountId {
    /// Create an identity from a raw string.
    ///
    /// # Panics
    /// Panics if the string is not a valid identity. Use [`str::parse`]
    /// or [`AccountId::try_from`] for untrusted input.
    pub fn new(raw: impl Into<String>) -> Self {
        match Self::try_from(raw.into()) {
            Ok(id) => id,
            Err(e) => panic!("{e}"),
        }
    }

    /// Return the raw identity string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(raw: &str) -> Result<(), TypesError> {
        if raw.is_empty() || raw.trim() != raw {
            return Err(TypesError::InvalidAccountId(raw.to_string()));
        }
        Ok(())
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for AccountId {
    type Error = TypesError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::validate(&raw)?;
        Ok(Self(raw))
    }
}

impl FromStr for AccountId {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_string())
    }
}

impl From<AccountId> for String {
    fn from(id: AccountId) -> Self {
        id.0
    }
}
