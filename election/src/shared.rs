//! A lock-serialized handle for hosts with concurrent callers.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::Election;

/// Shares one [`Election`] between threads.
///
/// Every access goes through a single mutex, so operations are applied
/// one at a time and none can observe another half-applied. Operations
/// validate before they write, which keeps the aggregate consistent even
/// if a listener panicked while the lock was held; a poisoned lock is
/// therefore recovered rather than propagated.
#[derive(Clone)]
pub struct SharedElection {
    inner: Arc<Mutex<Election>>,
}

impl SharedElection {
    pub fn new(election: Election) -> Self {
        Self {
            inner: Arc::new(Mutex::new(election)),
        }
    }

    /// Run `f` with exclusive access to the election.
    pub fn with<R>(&self, f: impl FnOnce(&mut Election) -> R) -> R {
        f(&mut self.lock())
    }

    pub fn lock(&self) -> MutexGuard<'_, Election> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
