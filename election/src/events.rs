//! Notifications emitted by committed election operations.

use ballot_types::{AccountId, ProposalId, WorkflowStatus};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, PoisonError};

/// One notification, emitted after the state change it describes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ElectionEvent {
    VoterRegistered {
        voter: AccountId,
    },
    WorkflowStatusChange {
        previous: WorkflowStatus,
        new: WorkflowStatus,
    },
    ProposalRegistered {
        proposal_id: ProposalId,
    },
    Voted {
        voter: AccountId,
        proposal_id: ProposalId,
    },
    AdministrationTransferred {
        previous: AccountId,
        new: AccountId,
    },
}

type Listener = Box<dyn Fn(&ElectionEvent) + Send + Sync>;

/// Synchronous fan-out event bus.
///
/// Listeners run inline, in subscription order, on the thread that
/// performed the operation.
pub struct EventBus {
    listeners: Vec<Listener>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, listener: Listener) {
        self.listeners.push(listener);
    }

    pub fn emit(&self, event: &ElectionEvent) {
        for listener in &self.listeners {
            listener(event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// A clonable in-memory record of emitted events.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Arc<Mutex<Vec<ElectionEvent>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A bus listener that appends to this log.
    pub fn listener(&self) -> Listener {
        let events = Arc::clone(&self.events);
        Box::new(move |event| {
            events
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(event.clone());
        })
    }

    /// Everything recorded so far, in emission order.
    pub fn events(&self) -> Vec<ElectionEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The most recent event, if any.
    pub fn last(&self) -> Option<ElectionEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }

    /// Remove and return everything recorded so far.
    pub fn drain(&self) -> Vec<ElectionEvent> {
        std::mem::take(&mut *self.events.lock().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn len(&self) -> usize {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
