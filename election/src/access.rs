//! Administrator authorization.

use ballot_types::AccountId;

use crate::ElectionError;

/// Whether `caller` is the administrator.
///
/// The whole authorization model is this predicate; [`AccessGuard`] only
/// holds the administrator identity it is evaluated against.
pub fn is_administrator(caller: &AccountId, administrator: &AccountId) -> bool {
    caller == administrator
}

/// Holds the single administrator identity of an election.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessGuard {
    administrator: AccountId,
}

impl AccessGuard {
    pub fn new(administrator: AccountId) -> Self {
        Self { administrator }
    }

    pub fn administrator(&self) -> &AccountId {
        &self.administrator
    }

    pub fn is_administrator(&self, caller: &AccountId) -> bool {
        is_administrator(caller, &self.administrator)
    }

    /// Fail with [`ElectionError::Unauthorized`] unless `caller` is the administrator.
    pub fn ensure_administrator(&self, caller: &AccountId) -> Result<(), ElectionError> {
        if self.is_administrator(caller) {
            Ok(())
        } else {
            Err(ElectionError::Unauthorized {
                caller: caller.clone(),
            })
        }
    }

    /// Hand the role to `new_administrator`, returning the previous holder.
    pub fn transfer(&mut self, new_administrator: AccountId) -> AccountId {
        std::mem::replace(&mut self.administrator, new_administrator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> AccountId {
        AccountId::new(s)
    }

    #[test]
    fn predicate_matches_only_the_administrator() {
        assert!(is_administrator(&id("owner"), &id("owner")));
        assert!(!is_administrator(&id("user1"), &id("owner")));
    }

    #[test]
    fn ensure_rejects_other_callers() {
        let guard = AccessGuard::new(id("owner"));
        assert!(guard.ensure_administrator(&id("owner")).is_ok());
        assert_eq!(
            guard.ensure_administrator(&id("user1")),
            Err(ElectionError::Unauthorized { caller: id("user1") })
        );
    }

    #[test]
    fn transfer_moves_the_role() {
        let mut guard = AccessGuard::new(id("owner"));
        let previous = guard.transfer(id("heir"));
        assert_eq!(previous, id("owner"));
        assert!(guard.is_administrator(&id("heir")));
        assert!(!guard.is_administrator(&id("owner")));
    }
}
